//! Interactive console for the flightbook booking store.
//!
//! Parses arguments, then either runs a single command or the interactive
//! menu. All prompting and rendering happens here; the store only returns data.

pub mod app;
pub mod args;
pub mod error;
pub mod menu;
pub mod prompt;
pub mod render;

use std::io;

use flightbook_store::BookingStore;

use crate::{
    app::{App, Outcome},
    args::{Cli, Command},
    error::CliError,
    prompt::RustylinePrompt,
};

/// Run the command selected by `cli` against stdin/stdout.
pub fn run_cli(cli: Cli) -> Result<(), CliError> {
    let store = BookingStore::open(&cli.store_config());
    tracing::debug!("Using bookings table {}", cli.bookings.display());

    let prompt = RustylinePrompt::new()?;
    let mut app = App::new(store, cli.export_config(), prompt, io::stdout());
    run_command(&mut app, cli.command.unwrap_or(Command::Menu))
}

/// Dispatch one command on an existing app.
pub fn run_command<P, W>(app: &mut App<P, W>, command: Command) -> Result<(), CliError>
where
    P: prompt::Prompt,
    W: io::Write,
{
    let outcome = match command {
        Command::Menu => return menu::run_menu(app),
        Command::List => app.display_all_bookings()?,
        Command::Add {
            name,
            departure,
            from,
            to,
            yes,
        } => app.add_booking_with(&name, &departure, &from, &to, yes)?,
        Command::After { time } => app.show_bookings_at_or_after(&time)?,
        Command::Visits { from, to } => app.show_sequential_visits(&from, &to)?,
        Command::Flights => app.display_flights()?,
    };

    if outcome == Outcome::InputClosed {
        tracing::debug!("Input closed before the command completed");
    }
    Ok(())
}
