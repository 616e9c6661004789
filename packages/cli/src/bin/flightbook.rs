//! flightbook: record and query flight bookings kept in a CSV file.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin flightbook -- --bookings data/bookings.csv
//! ```

use flightbook_cli::args::Cli;
use flightbook_shared::logger::setup_logger;

fn main() {
    let cli = Cli::parse_args();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &cli.log_level);

    if let Err(e) = flightbook_cli::run_cli(cli) {
        tracing::error!("flightbook error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
