//! CSV file repositories.

mod booking;
mod flight_info;

pub use booking::CsvBookingRepository;
pub use flight_info::CsvFlightInfoRepository;

use std::path::Path;

use crate::domain::RepositoryError;

fn io_error(path: &Path, err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

fn parse_error(path: &Path, row: u64, err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::Parse {
        path: path.display().to_string(),
        row,
        message: err.to_string(),
    }
}

/// Split csv errors into I/O failures and malformed content.
fn csv_error(path: &Path, row: u64, err: ::csv::Error) -> RepositoryError {
    if matches!(err.kind(), ::csv::ErrorKind::Io(_)) {
        io_error(path, err)
    } else {
        parse_error(path, row, err)
    }
}
