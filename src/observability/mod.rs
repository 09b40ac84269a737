//! Logging setup and crash reporting for the binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary so embedders keep control of their own logging.

pub mod panic_hook;

pub use panic_hook::install_panic_hook;

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "hdbmatch=warn",
        1 => "hdbmatch=info",
        2 => "hdbmatch=debug",
        _ => "hdbmatch=trace",
    }
}

/// Install a stderr subscriber. `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
