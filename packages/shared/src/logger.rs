//! Logger setup on top of `tracing-subscriber`.

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence. Without it, events at `default_level` and
/// above are emitted for `bin_name` and the flightbook crates.
///
/// Output goes to stderr so that tables printed on stdout stay clean.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{bin}={level},flightbook_cli={level},flightbook_store={level},flightbook_shared={level}",
            bin = bin_name.replace('-', "_"),
            level = default_level,
        ))
    });

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
