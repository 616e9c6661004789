//! CLI argument definitions using clap
//!
//! Commands:
//! - flightbook [menu]
//! - flightbook list
//! - flightbook add --name <NAME> --departure <TIME> --from <CODE> --to <CODE> [--yes]
//! - flightbook after <TIME>
//! - flightbook visits <FROM> <TO>
//! - flightbook flights

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use flightbook_store::{ParsePolicy, StoreConfig};

/// flightbook - record and query flight bookings kept in a CSV file
#[derive(Parser, Debug)]
#[command(name = "flightbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the bookings table
    #[arg(long, global = true, default_value = "data/bookings.csv")]
    pub bookings: PathBuf,

    /// Path to the flight/airport reference table
    #[arg(long, global = true, default_value = "data/flight_infos.csv")]
    pub flight_info: PathBuf,

    /// Directory receiving HTML exports (must exist)
    #[arg(long, global = true, default_value = "output")]
    pub output_dir: PathBuf,

    /// Skip malformed booking rows instead of failing
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive menu (default)
    Menu,

    /// Display all bookings and export them to HTML
    List,

    /// Add a booking
    Add {
        /// Passenger name
        #[arg(long)]
        name: String,
        /// Departure, e.g. "may-26 6:45 2020"
        #[arg(long)]
        departure: String,
        /// Origin airport code
        #[arg(long)]
        from: String,
        /// Destination airport code
        #[arg(long)]
        to: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Bookings departing at or after TIME
    After {
        /// Threshold, e.g. "may-26 6:45 2020"
        time: String,
    },

    /// Bookings visiting FROM and then TO as consecutive stops
    Visits { from: String, to: String },

    /// Display flight and airport details and export them to HTML
    Flights,
}

/// Where HTML exports are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
}

impl ExportConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn bookings_html(&self) -> PathBuf {
        self.output_dir.join("bookings.html")
    }

    pub fn flight_details_html(&self) -> PathBuf {
        self.output_dir.join("flight_details.html")
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    pub fn store_config(&self) -> StoreConfig {
        let policy = if self.lenient {
            ParsePolicy::Lenient
        } else {
            ParsePolicy::Strict
        };
        StoreConfig::new(&self.bookings, &self.flight_info).with_parse_policy(policy)
    }

    pub fn export_config(&self) -> ExportConfig {
        ExportConfig::new(&self.output_dir)
    }
}
