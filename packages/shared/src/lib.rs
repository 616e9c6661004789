//! Shared utilities for flightbook.
//!
//! Logger setup and the departure time format used by every package.

pub mod logger;
pub mod time;
