//! Domain layer for the booking store.
//!
//! This module contains business logic that is independent of
//! the CSV row format and of file system concerns.

pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;

pub use entity::{BOOKING_HEADERS, BookingRecord, FlightTable};
pub use error::{RepositoryError, ValueObjectError};
pub use repository::{BookingRepository, FlightInfoRepository};
pub use value_object::{AirportCode, Departure, Itinerary, PassengerName};
