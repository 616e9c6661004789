//! Console actions on top of [`BookingStore`].
//!
//! Every action gathers its input through a [`Prompt`], calls the store and
//! writes the result as a table. The store itself never prompts or prints.

use std::{io::Write, path::Path};

use flightbook_shared::time::DEPARTURE_FORMAT_HINT;
use flightbook_store::{BookingRecord, BookingStore};

use crate::{args::ExportConfig, error::CliError, prompt::Prompt, render};

const DEPARTURE_EXAMPLE: &str = "may-26 6:45 2020";

/// How an action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The user declined the confirmation
    Cancelled,
    /// Input closed before the action could complete
    InputClosed,
}

pub struct App<P: Prompt, W: Write> {
    store: BookingStore,
    export: ExportConfig,
    prompt: P,
    out: W,
}

impl<P: Prompt, W: Write> App<P, W> {
    pub fn new(store: BookingStore, export: ExportConfig, prompt: P, out: W) -> Self {
        Self {
            store,
            export,
            prompt,
            out,
        }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn prompt(&mut self) -> &mut P {
        &mut self.prompt
    }

    pub fn into_parts(self) -> (P, W) {
        (self.prompt, self.out)
    }

    /// Read one line, trimmed. `None` once input is closed.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        Ok(self
            .prompt
            .read_line(prompt)?
            .map(|line| line.trim().to_string()))
    }

    /// Print every booking, then export them to `bookings.html`.
    pub fn display_all_bookings(&mut self) -> Result<Outcome, CliError> {
        writeln!(self.out, "|-------------------Booking Details-------------------|")?;
        let records = self.store.list_all()?;
        let rows = to_rows(&records);
        self.print_table(&BookingStore::booking_headers(), &rows)?;

        let path = self.export.bookings_html();
        export(&path, &BookingStore::booking_headers(), &rows)?;
        writeln!(self.out, "Exported {} bookings to {}", rows.len(), path.display())?;
        tracing::info!("Listed {} bookings", rows.len());
        Ok(Outcome::Done)
    }

    /// Ask for the booking fields, confirm, then append.
    pub fn add_booking(&mut self) -> Result<Outcome, CliError> {
        let Some(name) = self.ask("Enter your name: ")? else {
            return Ok(Outcome::InputClosed);
        };
        writeln!(
            self.out,
            "Enter date in ({DEPARTURE_FORMAT_HINT}), example: {DEPARTURE_EXAMPLE}"
        )?;
        let Some(departure) = self.ask("Departure: ")? else {
            return Ok(Outcome::InputClosed);
        };
        let Some(origin) = self.ask("Enter origin IATA code (e.g. AMS): ")? else {
            return Ok(Outcome::InputClosed);
        };
        let Some(destination) = self.ask("Enter destination IATA code (e.g. LHR): ")? else {
            return Ok(Outcome::InputClosed);
        };

        self.add_booking_with(&name, &departure, &origin, &destination, false)
    }

    /// Validate, confirm unless `confirmed`, then append.
    pub fn add_booking_with(
        &mut self,
        name: &str,
        departure: &str,
        origin: &str,
        destination: &str,
        confirmed: bool,
    ) -> Result<Outcome, CliError> {
        let record = BookingStore::prepare(name, departure, origin, destination)?;
        writeln!(self.out, "New booking details")?;
        writeln!(self.out, "Pax name: {}", record.passenger_name())?;
        writeln!(self.out, "Departure: {}", record.departure())?;
        writeln!(self.out, "Itinerary: {}", record.itinerary())?;

        if !confirmed {
            let Some(answer) = self.ask("Do you want to add this booking? y/n: ")? else {
                return Ok(Outcome::InputClosed);
            };
            if !is_yes(&answer) {
                writeln!(self.out, "Cancelled booking")?;
                return Ok(Outcome::Cancelled);
            }
        }

        let passenger = record.passenger_name().to_string();
        self.store.append(record)?;
        writeln!(self.out, "Booking added")?;
        tracing::info!("Added booking for '{}'", passenger);
        Ok(Outcome::Done)
    }

    /// Ask for a threshold and print bookings departing at or after it.
    pub fn bookings_at_or_after(&mut self) -> Result<Outcome, CliError> {
        writeln!(
            self.out,
            "Enter date in ({DEPARTURE_FORMAT_HINT}), example: {DEPARTURE_EXAMPLE}"
        )?;
        let Some(threshold) = self.ask("Departure time: ")? else {
            return Ok(Outcome::InputClosed);
        };
        self.show_bookings_at_or_after(&threshold)
    }

    pub fn show_bookings_at_or_after(&mut self, threshold: &str) -> Result<Outcome, CliError> {
        let records = self.store.find_departing_at_or_after_raw(threshold)?;
        writeln!(
            self.out,
            "Bookings departing at or after {} are as follows:",
            threshold.trim()
        )?;
        self.print_table(&BookingStore::booking_headers(), &to_rows(&records))?;
        tracing::info!("Found {} bookings at or after '{}'", records.len(), threshold.trim());
        Ok(Outcome::Done)
    }

    /// Show the flight table, then ask for two codes and print matching bookings.
    ///
    /// The flight table is only a reference here: when it cannot be shown or
    /// exported the error is reported and the prompts still follow.
    pub fn sequential_visits(&mut self) -> Result<Outcome, CliError> {
        if let Err(e) = self.display_flights() {
            if !e.is_recoverable() {
                return Err(e);
            }
            tracing::debug!("Flight details unavailable: {}", e);
            writeln!(self.out, "Error: {}", e)?;
        }
        writeln!(self.out, "\nPlease refer to the flight details above")?;
        let Some(from) = self.ask("Enter 1st airport IATA code (e.g. LHR): ")? else {
            return Ok(Outcome::InputClosed);
        };
        let Some(to) = self.ask("Enter 2nd airport IATA code (e.g. AMS): ")? else {
            return Ok(Outcome::InputClosed);
        };
        self.show_sequential_visits(&from, &to)
    }

    pub fn show_sequential_visits(&mut self, from: &str, to: &str) -> Result<Outcome, CliError> {
        let records = self.store.find_sequential_visit(from, to)?;
        writeln!(
            self.out,
            "Bookings visiting 2 airports {}->{} sequentially are as follows:",
            from.trim().to_ascii_uppercase(),
            to.trim().to_ascii_uppercase()
        )?;
        self.print_table(&BookingStore::booking_headers(), &to_rows(&records))?;
        tracing::info!("Found {} bookings visiting {}->{}", records.len(), from, to);
        Ok(Outcome::Done)
    }

    /// Print the flight reference table, then export it to `flight_details.html`.
    pub fn display_flights(&mut self) -> Result<Outcome, CliError> {
        writeln!(self.out, "|-----------------------Flight Details-----------------------|")?;
        let table = self.store.flight_info()?;
        self.print_table(table.headers.as_slice(), &table.rows)?;

        let path = self.export.flight_details_html();
        export(&path, table.headers.as_slice(), &table.rows)?;
        tracing::info!("Exported {} flight rows to {}", table.len(), path.display());
        Ok(Outcome::Done)
    }

    fn print_table(
        &mut self,
        headers: &[impl AsRef<str>],
        rows: &[Vec<String>],
    ) -> Result<(), CliError> {
        write!(self.out, "{}", render::render_table(headers, rows))?;
        Ok(())
    }
}

fn to_rows(records: &[BookingRecord]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|record| record.cells().to_vec())
        .collect()
}

fn export(path: &Path, headers: &[impl AsRef<str>], rows: &[Vec<String>]) -> Result<(), CliError> {
    render::export_html(path, headers, rows).map_err(|source| CliError::Export {
        path: path.to_path_buf(),
        source,
    })
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
