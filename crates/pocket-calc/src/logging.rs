//! Log output setup
//!
//! The library only emits `tracing` events. Hosts that want to see them call
//! [`init`] once; the filter comes from `POCKET_CALC_LOG` (for example
//! `POCKET_CALC_LOG=pocket_calc=debug`) and defaults to `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "POCKET_CALC_LOG";

/// Filter used when the environment variable is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Builds the filter from the environment
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs a formatting subscriber writing to stderr
///
/// Returns `false` when a global subscriber is already installed, so tests
/// may call it repeatedly.
pub fn init() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok()
}

/// Installs a subscriber that writes through the test harness capture
pub fn init_for_tests() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_test_writer()
        .try_init()
        .is_ok()
}
