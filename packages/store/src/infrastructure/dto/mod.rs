//! Data transfer objects for persisted tables.

pub mod csv;

pub use self::csv::BookingRow;
