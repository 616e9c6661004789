//! Interactive menu loop.
//!
//! Iterates until the user picks Exit or input closes. Failed actions are
//! reported and the loop goes on; only console I/O failures end the session.

use std::io::Write;

use crate::{
    app::{App, Outcome},
    error::CliError,
    prompt::Prompt,
};

const MENU_WIDTH: usize = 53;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    DisplayAll,
    AddBooking,
    DepartingAtOrAfter,
    SequentialVisits,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        Self::DisplayAll,
        Self::AddBooking,
        Self::DepartingAtOrAfter,
        Self::SequentialVisits,
        Self::Exit,
    ];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::DisplayAll),
            "2" => Some(Self::AddBooking),
            "3" => Some(Self::DepartingAtOrAfter),
            "4" => Some(Self::SequentialVisits),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::DisplayAll => "1. Display all bookings",
            Self::AddBooking => "2. Add Bookings",
            Self::DepartingAtOrAfter => "3. Get bookings departing at or after the given time",
            Self::SequentialVisits => "4. Get bookings that visits 2 airports sequentially",
            Self::Exit => "5. Exit",
        }
    }
}

/// Menu banner, one entry per line.
pub fn menu_text() -> String {
    let rule = format!("|{}|\n", "-".repeat(MENU_WIDTH));
    let mut text = rule.clone();
    text.push_str(&format!(
        "|{:^width$}|\n",
        "Welcome to the Flight Booking System",
        width = MENU_WIDTH
    ));
    text.push_str(&rule);
    for choice in MenuChoice::ALL {
        text.push_str(&format!("| {:<width$}|\n", choice.label(), width = MENU_WIDTH - 1));
    }
    text.push_str(&rule);
    text
}

/// Run the menu until Exit, end of input, or a fatal error.
pub fn run_menu<P: Prompt, W: Write>(app: &mut App<P, W>) -> Result<(), CliError> {
    loop {
        write!(app.out(), "{}", menu_text())?;
        let Some(input) = app.ask("> ")? else {
            break;
        };

        let Some(choice) = MenuChoice::parse(&input) else {
            writeln!(app.out(), "Invalid entry! Please try again")?;
            continue;
        };

        let result = match choice {
            MenuChoice::DisplayAll => app.display_all_bookings(),
            MenuChoice::AddBooking => app.add_booking(),
            MenuChoice::DepartingAtOrAfter => app.bookings_at_or_after(),
            MenuChoice::SequentialVisits => app.sequential_visits(),
            MenuChoice::Exit => break,
        };

        match result {
            Ok(Outcome::InputClosed) => break,
            Ok(Outcome::Done | Outcome::Cancelled) => {}
            Err(e) if e.is_recoverable() => {
                tracing::debug!("{:?} failed: {}", choice, e);
                writeln!(app.out(), "Error: {}", e)?;
            }
            Err(e) => return Err(e),
        }
    }

    writeln!(app.out(), "Goodbye")?;
    Ok(())
}
