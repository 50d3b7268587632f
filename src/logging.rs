use std::io;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `LCD_LOG=debug`)
pub const LOG_ENV_VAR: &str = "LCD_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the stderr log subscriber
///
/// stdout is reserved for paths, so diagnostics always go to stderr and never
/// carry color codes. Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .try_init();
}
