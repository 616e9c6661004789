//! BookingStore: the entry point used by the presentation layer.
//!
//! Wires the CSV repositories named in a [`StoreConfig`] into the use cases.
//! Each call builds its use case on the spot; nothing is cached between
//! calls, so every query re-reads the bookings table.

use std::sync::Arc;

use crate::{
    config::StoreConfig,
    domain::{
        AirportCode, BOOKING_HEADERS, BookingRecord, BookingRepository, Departure,
        FlightInfoRepository, FlightTable,
    },
    infrastructure::repository::{CsvBookingRepository, CsvFlightInfoRepository},
    usecase::{
        AddBookingUseCase, BookingError, FindDepartingAtOrAfterUseCase,
        FindSequentialVisitUseCase, ListBookingsUseCase, ShowFlightInfoUseCase,
    },
};

/// Booking table plus the read-only flight reference table.
#[derive(Clone)]
pub struct BookingStore {
    bookings: Arc<dyn BookingRepository>,
    flight_info: Arc<dyn FlightInfoRepository>,
}

impl BookingStore {
    /// Open the CSV backed store described by `config`.
    ///
    /// Files are not touched until the first operation.
    pub fn open(config: &StoreConfig) -> Self {
        Self::with_repositories(
            Arc::new(CsvBookingRepository::new(
                &config.bookings_path,
                config.parse_policy,
            )),
            Arc::new(CsvFlightInfoRepository::new(&config.flight_info_path)),
        )
    }

    pub fn with_repositories(
        bookings: Arc<dyn BookingRepository>,
        flight_info: Arc<dyn FlightInfoRepository>,
    ) -> Self {
        Self {
            bookings,
            flight_info,
        }
    }

    /// Column names of [`BookingStore::list_all`] and the query results.
    pub fn booking_headers() -> [&'static str; 3] {
        BOOKING_HEADERS
    }

    /// Validate raw input into a record without storing it.
    pub fn prepare(
        name: &str,
        departure: &str,
        origin: &str,
        destination: &str,
    ) -> Result<BookingRecord, BookingError> {
        AddBookingUseCase::prepare(name, departure, origin, destination)
    }

    /// Append one record to the bookings table.
    pub fn append(&self, record: BookingRecord) -> Result<(), BookingError> {
        AddBookingUseCase::new(self.bookings.clone()).execute(record)?;
        Ok(())
    }

    /// Validate and append in one step.
    pub fn append_raw(
        &self,
        name: &str,
        departure: &str,
        origin: &str,
        destination: &str,
    ) -> Result<BookingRecord, BookingError> {
        let record = Self::prepare(name, departure, origin, destination)?;
        AddBookingUseCase::new(self.bookings.clone()).execute(record)
    }

    /// Every stored record, in file order.
    pub fn list_all(&self) -> Result<Vec<BookingRecord>, BookingError> {
        ListBookingsUseCase::new(self.bookings.clone()).execute()
    }

    /// Records departing at `threshold` or later (inclusive), in file order.
    pub fn find_departing_at_or_after(
        &self,
        threshold: &Departure,
    ) -> Result<Vec<BookingRecord>, BookingError> {
        FindDepartingAtOrAfterUseCase::new(self.bookings.clone()).execute(threshold)
    }

    /// Same as [`BookingStore::find_departing_at_or_after`] with the threshold
    /// given as `MMM-DD HH:MM YYYY` text.
    pub fn find_departing_at_or_after_raw(
        &self,
        threshold: &str,
    ) -> Result<Vec<BookingRecord>, BookingError> {
        let threshold = Departure::new(threshold.to_string())?;
        self.find_departing_at_or_after(&threshold)
    }

    /// Records whose itinerary visits `from` immediately followed by `to`.
    ///
    /// Codes are compared upper-cased.
    pub fn find_sequential_visit(
        &self,
        from: &str,
        to: &str,
    ) -> Result<Vec<BookingRecord>, BookingError> {
        let from = AirportCode::try_from(from)?;
        let to = AirportCode::try_from(to)?;
        FindSequentialVisitUseCase::new(self.bookings.clone()).execute(&from, &to)
    }

    /// The flight/airport reference table, unfiltered.
    pub fn flight_info(&self) -> Result<FlightTable, BookingError> {
        ShowFlightInfoUseCase::new(self.flight_info.clone()).execute()
    }
}
