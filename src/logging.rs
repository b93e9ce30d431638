//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`; stdout is kept for the
//! run summary.

use tracing_subscriber::EnvFilter;

/// Filter directive variable, e.g. `RN_PREPARE_LOG=rn_prepare=trace`
pub const LOG_ENV: &str = "RN_PREPARE_LOG";

/// Initialize the global subscriber. `RN_PREPARE_LOG` wins over `verbose`.
pub fn init(verbose: bool) {
    let default = if verbose {
        "rn_prepare=debug"
    } else {
        "rn_prepare=info"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber may already be installed when running under a test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(console::user_attended_stderr())
        .with_writer(std::io::stderr)
        .try_init();
}
