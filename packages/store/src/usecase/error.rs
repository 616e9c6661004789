//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{RepositoryError, ValueObjectError};

/// Errors surfaced to the caller of a booking operation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// A date or itinerary text does not match its fixed format
    #[error("Parse error: {0}")]
    Parse(String),

    /// The backing table cannot be opened, read or appended to
    #[error("I/O error: {0}")]
    Io(String),

    /// Required input is empty or otherwise unusable
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ValueObjectError> for BookingError {
    fn from(err: ValueObjectError) -> Self {
        if err.is_format_error() {
            Self::Parse(err.to_string())
        } else {
            Self::Validation(err.to_string())
        }
    }
}

impl From<RepositoryError> for BookingError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Io { .. } => Self::Io(err.to_string()),
            RepositoryError::Parse { .. } => Self::Parse(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_errors_map_to_parse() {
        // テスト項目: フォーマット不一致は Parse、空入力は Validation に分類される
        // then (期待する結果):
        let parse = BookingError::from(ValueObjectError::ItineraryInvalidFormat("AMS->".into()));
        assert!(matches!(parse, BookingError::Parse(_)));

        let validation = BookingError::from(ValueObjectError::PassengerNameEmpty);
        assert_eq!(
            validation,
            BookingError::Validation("Passenger name cannot be empty".to_string())
        );
    }

    #[test]
    fn test_repository_errors_keep_their_kind() {
        // テスト項目: Repository のエラー種別が保たれる
        // given (前提条件):
        let io = RepositoryError::Io {
            path: "bookings.csv".to_string(),
            message: "No such file or directory".to_string(),
        };
        let parse = RepositoryError::Parse {
            path: "bookings.csv".to_string(),
            row: 3,
            message: "bad date".to_string(),
        };

        // then (期待する結果):
        assert_eq!(
            BookingError::from(io),
            BookingError::Io("Failed to access bookings.csv: No such file or directory".to_string())
        );
        assert_eq!(
            BookingError::from(parse),
            BookingError::Parse("Malformed row 3 in bookings.csv: bad date".to_string())
        );
    }
}
