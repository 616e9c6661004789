//! Departure time format helpers.

use chrono::NaiveDateTime;

/// chrono format of a departure, e.g. `may-26 6:45 2020`.
///
/// Month abbreviations are matched case-insensitively, day and hour accept
/// one or two digits.
pub const DEPARTURE_FORMAT: &str = "%b-%d %H:%M %Y";

/// Human readable form of [`DEPARTURE_FORMAT`], used in prompts and errors.
pub const DEPARTURE_FORMAT_HINT: &str = "MMM-DD HH:MM YYYY";

/// Parse departure text in [`DEPARTURE_FORMAT`].
pub fn parse_departure(text: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(text.trim(), DEPARTURE_FORMAT)
}
