//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use std::{cmp::Ordering, fmt, hash};

use chrono::NaiveDateTime;
use flightbook_shared::time::parse_departure;

use super::error::ValueObjectError;

/// Separator between airport codes in a stored itinerary.
pub const ITINERARY_SEPARATOR: &str = "->";

/// Minimum number of stops for an itinerary to be meaningful.
pub const MIN_ITINERARY_STOPS: usize = 2;

/// Passenger name value object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PassengerName(String);

impl PassengerName {
    /// Create a new PassengerName.
    ///
    /// Surrounding whitespace is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::PassengerNameEmpty` if nothing is left after trimming
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::PassengerNameEmpty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PassengerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Airport code value object.
///
/// Always upper-cased. Input is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AirportCode(String);

impl AirportCode {
    /// Create a new AirportCode.
    ///
    /// # Arguments
    ///
    /// * `code` - IATA style code such as `ams` or `LHR`
    ///
    /// # Returns
    ///
    /// A Result containing the upper-cased AirportCode or an error if validation fails
    pub fn new(code: String) -> Result<Self, ValueObjectError> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::AirportCodeEmpty);
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValueObjectError::AirportCodeInvalid(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for AirportCode {
    type Error = ValueObjectError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered sequence of airport codes a booking visits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Itinerary(Vec<AirportCode>);

impl Itinerary {
    /// Create an itinerary from its stops.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::ItineraryTooShort` for fewer than two stops
    pub fn new(stops: Vec<AirportCode>) -> Result<Self, ValueObjectError> {
        if stops.len() < MIN_ITINERARY_STOPS {
            return Err(ValueObjectError::ItineraryTooShort {
                min: MIN_ITINERARY_STOPS,
                actual: stops.len(),
            });
        }
        Ok(Self(stops))
    }

    /// Direct origin to destination itinerary.
    pub fn route(origin: AirportCode, destination: AirportCode) -> Self {
        Self(vec![origin, destination])
    }

    /// Parse the stored `SRC->DST` form.
    ///
    /// Codes are normalized the same way as user input.
    pub fn parse(text: &str) -> Result<Self, ValueObjectError> {
        let stops = text
            .split(ITINERARY_SEPARATOR)
            .map(AirportCode::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ValueObjectError::ItineraryInvalidFormat(text.to_string()))?;
        Self::new(stops)
    }

    pub fn stops(&self) -> &[AirportCode] {
        &self.0
    }

    pub fn origin(&self) -> &AirportCode {
        &self.0[0]
    }

    pub fn destination(&self) -> &AirportCode {
        &self.0[self.0.len() - 1]
    }

    /// Whether `from` is immediately followed by `to` somewhere along the way.
    pub fn visits_sequentially(&self, from: &AirportCode, to: &AirportCode) -> bool {
        self.0
            .windows(2)
            .any(|pair| &pair[0] == from && &pair[1] == to)
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(AirportCode::as_str)
            .collect::<Vec<_>>()
            .join(ITINERARY_SEPARATOR);
        write!(f, "{}", joined)
    }
}

/// Departure timestamp value object.
///
/// Keeps the text it was parsed from so that a stored booking reads back
/// exactly as it was entered. Comparison uses the parsed timestamp only.
#[derive(Debug, Clone)]
pub struct Departure {
    text: String,
    at: NaiveDateTime,
}

impl Departure {
    /// Parse a departure in the `MMM-DD HH:MM YYYY` format.
    pub fn new(text: String) -> Result<Self, ValueObjectError> {
        let text = text.trim().to_string();
        let at = parse_departure(&text).map_err(|e| ValueObjectError::DepartureInvalidFormat {
            input: text.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { text, at })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn at(&self) -> NaiveDateTime {
        self.at
    }
}

impl PartialEq for Departure {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at
    }
}

impl Eq for Departure {}

impl PartialOrd for Departure {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Departure {
    fn cmp(&self, other: &Self) -> Ordering {
        self.at.cmp(&other.at)
    }
}

impl hash::Hash for Departure {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.at.hash(state);
    }
}

impl fmt::Display for Departure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
