//! Store configuration.

use std::path::PathBuf;

/// How malformed rows in the bookings table are handled on read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Abort the whole read on the first malformed row
    #[default]
    Strict,
    /// Skip malformed rows and log a warning for each
    Lenient,
}

/// Locations of the tables backing a [`crate::BookingStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// CSV file holding the booking records
    pub bookings_path: PathBuf,
    /// CSV file holding the flight/airport reference table
    pub flight_info_path: PathBuf,
    /// Handling of malformed booking rows
    pub parse_policy: ParsePolicy,
}

impl StoreConfig {
    pub fn new(bookings_path: impl Into<PathBuf>, flight_info_path: impl Into<PathBuf>) -> Self {
        Self {
            bookings_path: bookings_path.into(),
            flight_info_path: flight_info_path.into(),
            parse_policy: ParsePolicy::default(),
        }
    }

    pub fn with_parse_policy(mut self, parse_policy: ParsePolicy) -> Self {
        self.parse_policy = parse_policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_config_defaults_to_strict() {
        // テスト項目: パースポリシーのデフォルトは Strict
        // when (操作):
        let config = StoreConfig::new("bookings.csv", "flight_infos.csv");

        // then (期待する結果):
        assert_eq!(config.parse_policy, ParsePolicy::Strict);
        assert_eq!(config.bookings_path, PathBuf::from("bookings.csv"));
    }

    #[test]
    fn test_store_config_with_parse_policy() {
        // テスト項目: パースポリシーを変更できる
        // when (操作):
        let config =
            StoreConfig::new("b.csv", "f.csv").with_parse_policy(ParsePolicy::Lenient);

        // then (期待する結果):
        assert_eq!(config.parse_policy, ParsePolicy::Lenient);
    }
}
