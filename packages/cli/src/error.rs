//! CLI error definitions.

use std::path::PathBuf;

use flightbook_store::BookingError;
use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// A store operation failed (bad input, malformed table, unreadable file)
    #[error(transparent)]
    Booking(#[from] BookingError),

    /// An HTML export could not be written
    #[error("I/O error: failed to export {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The line editor failed
    #[error("Failed to read input: {0}")]
    Readline(#[from] ReadlineError),

    /// Writing to the console failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    /// Whether the interactive session can go on after reporting the error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Booking(_) | Self::Export { .. })
    }
}
