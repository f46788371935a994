//! Tracing subscriber setup
//!
//! The library only emits `tracing` events. Hosts embedding the pipeline
//! (and the test suites) call [`init_logging`] once to see them.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_DIRECTIVE: &str = "scorecast=info";

/// Install the global fmt subscriber with the default filter.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging() -> bool {
    init_logging_with(DEFAULT_DIRECTIVE)
}

/// Install the global fmt subscriber, falling back to `default_directive`
/// when `RUST_LOG` is absent or invalid.
pub fn init_logging_with(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
