//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// PassengerName validation error
    #[error("Passenger name cannot be empty")]
    PassengerNameEmpty,

    /// AirportCode validation error
    #[error("Airport code cannot be empty")]
    AirportCodeEmpty,

    /// AirportCode contains characters other than ASCII letters and digits
    #[error("Airport code must be alphanumeric (got: {0})")]
    AirportCodeInvalid(String),

    /// Departure text does not match `MMM-DD HH:MM YYYY`
    #[error("Departure must match MMM-DD HH:MM YYYY (got: {input}): {reason}")]
    DepartureInvalidFormat { input: String, reason: String },

    /// Itinerary has fewer stops than required
    #[error("Itinerary needs at least {min} airport codes (got {actual})")]
    ItineraryTooShort { min: usize, actual: usize },

    /// Stored itinerary text is not a `->` separated list of codes
    #[error("Itinerary must look like SRC->DST (got: {0})")]
    ItineraryInvalidFormat(String),
}

impl ValueObjectError {
    /// Whether the error comes from text that failed to match a fixed format,
    /// as opposed to a missing or empty input.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::DepartureInvalidFormat { .. }
                | Self::ItineraryInvalidFormat(_)
                | Self::ItineraryTooShort { .. }
        )
    }
}

/// Errors raised by repository implementations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing table cannot be opened, read or appended to
    #[error("Failed to access {path}: {message}")]
    Io { path: String, message: String },

    /// A stored row cannot be turned back into a domain value
    #[error("Malformed row {row} in {path}: {message}")]
    Parse {
        path: String,
        row: u64,
        message: String,
    },
}
