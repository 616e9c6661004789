//! CSV row DTOs for the bookings table.

use serde::{Deserialize, Serialize};

use crate::domain::{BookingRecord, Departure, Itinerary, PassengerName, ValueObjectError};

/// One row of the bookings table: `name,departure,itinerary`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRow {
    pub name: String,
    pub departure: String, // MMM-DD HH:MM YYYY
    pub itinerary: String, // SRC->DST
}

impl From<&BookingRecord> for BookingRow {
    fn from(record: &BookingRecord) -> Self {
        Self {
            name: record.passenger_name().to_string(),
            departure: record.departure().to_string(),
            itinerary: record.itinerary().to_string(),
        }
    }
}

impl TryFrom<BookingRow> for BookingRecord {
    type Error = ValueObjectError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        let passenger_name = PassengerName::new(row.name)?;
        let departure = Departure::new(row.departure)?;
        let itinerary = Itinerary::parse(&row.itinerary)?;
        Ok(BookingRecord::new(passenger_name, departure, itinerary))
    }
}
