//! Logging setup.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Output goes to stderr so stdout stays free for command output. `RUST_LOG`
/// wins when set; otherwise the configured `log_level` is used. Calling this
/// twice is harmless: the second call leaves the first subscriber in place.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
