//! Observability: logging setup and in-process counters.
//!
//! Logs go to stderr through `tracing`; counters are cheap atomics the
//! contact service bumps as it works.

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
pub use metrics::{MetricsTracker, Timer};
