//! Core domain models for the booking store.

use super::value_object::{AirportCode, Departure, Itinerary, PassengerName};

/// Column names of the bookings table, in storage order.
pub const BOOKING_HEADERS: [&str; 3] = ["name", "departure", "itinerary"];

/// One passenger's reservation.
///
/// Records are immutable once created; the store only appends and reads them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookingRecord {
    passenger_name: PassengerName,
    departure: Departure,
    itinerary: Itinerary,
}

impl BookingRecord {
    /// Create a new booking record
    pub fn new(passenger_name: PassengerName, departure: Departure, itinerary: Itinerary) -> Self {
        Self {
            passenger_name,
            departure,
            itinerary,
        }
    }

    pub fn passenger_name(&self) -> &PassengerName {
        &self.passenger_name
    }

    pub fn departure(&self) -> &Departure {
        &self.departure
    }

    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    /// Whether the booking departs at `threshold` or later (inclusive)
    pub fn departs_at_or_after(&self, threshold: &Departure) -> bool {
        self.departure.at() >= threshold.at()
    }

    /// Whether the itinerary visits `from` and then `to` as consecutive stops
    pub fn visits_sequentially(&self, from: &AirportCode, to: &AirportCode) -> bool {
        self.itinerary.visits_sequentially(from, to)
    }

    /// Cell values in [`BOOKING_HEADERS`] order
    pub fn cells(&self) -> [String; 3] {
        [
            self.passenger_name.to_string(),
            self.departure.to_string(),
            self.itinerary.to_string(),
        ]
    }
}

/// Read-only flight/airport reference table, kept as plain named columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightTable {
    /// Column names taken from the header row
    pub headers: Vec<String>,
    /// Data rows in file order
    pub rows: Vec<Vec<String>>,
}

impl FlightTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
