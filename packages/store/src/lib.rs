//! CSV-backed flight booking store.
//!
//! Appends booking records to a flat CSV table and answers queries over it:
//! list everything, bookings departing at or after a time, and bookings whose
//! itinerary visits two airports consecutively. A second read-only table of
//! flight/airport metadata is exposed for display.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod store;
pub mod usecase;

// Re-export entry points
pub use config::{ParsePolicy, StoreConfig};
pub use domain::{BookingRecord, FlightTable};
pub use store::BookingStore;
pub use usecase::BookingError;
