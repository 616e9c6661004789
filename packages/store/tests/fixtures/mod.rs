//! Test fixtures: an isolated booking store on temporary files.

use std::{fs, path::PathBuf};

use flightbook_store::{BookingStore, ParsePolicy, StoreConfig};
use tempfile::TempDir;

pub const HEADER: &str = "name,departure,itinerary\n";

/// A store whose tables live in a temporary directory removed on drop
pub struct TestStore {
    _dir: TempDir,
    pub bookings_path: PathBuf,
    pub store: BookingStore,
}

impl TestStore {
    /// Store with an empty bookings file (no header) and a small flight table
    pub fn empty() -> Self {
        Self::with_bookings("", ParsePolicy::Strict)
    }

    /// Store whose bookings table starts out with `content`
    pub fn with_bookings(content: &str, policy: ParsePolicy) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let bookings_path = dir.path().join("bookings.csv");
        let flight_info_path = dir.path().join("flight_infos.csv");
        fs::write(&bookings_path, content).expect("Failed to write bookings");
        fs::write(
            &flight_info_path,
            "flight,origin,destination\nKL1001,AMS,LHR\nKL1002,LHR,CDG\n",
        )
        .expect("Failed to write flight infos");

        let config = StoreConfig::new(&bookings_path, &flight_info_path).with_parse_policy(policy);
        Self {
            _dir: dir,
            bookings_path,
            store: BookingStore::open(&config),
        }
    }
}
