//! Logging configuration using tracing

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "TRADEQUEST_LOG";

/// Initialize the logging subsystem. Logs go to stderr.
///
/// ```bash
/// TRADEQUEST_LOG=debug cargo run -p app
/// TRADEQUEST_LOG=ui=trace,info cargo run -p app
/// ```
pub fn init() {
    // Default to info, allow override via TRADEQUEST_LOG
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init();

    if installed.is_err() {
        tracing::debug!("global subscriber already installed");
    }
}
