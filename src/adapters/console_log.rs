//! Host console logger.
//!
//! The crate logs through the `log` facade; on the host those records are
//! bridged into a `tracing-subscriber` formatter writing to stderr, with
//! uptime timestamps:
//!
//! ```text
//!     1.204s  INFO seatheat::tasks::level_selector: driver: desired level -> Low
//! ```
//!
//! The filter comes from `SEATHEAT_LOG` in `EnvFilter` syntax
//! (`debug`, `seatheat::tasks=trace,info`, ...), default `info`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::uptime;

pub const LEVEL_ENV: &str = "SEATHEAT_LOG";

const DEFAULT_FILTER: &str = "info";

/// Error returned when a global logger is already installed.
pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Build the filter for a `SEATHEAT_LOG` value.  Unset or unparsable
/// values fall back to `info`.
pub fn filter_for(value: Option<&str>) -> EnvFilter {
    value
        .and_then(|v| EnvFilter::try_new(v.trim()).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the stderr subscriber and the `log` bridge.
pub fn init(filter: EnvFilter) -> Result<(), InitError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(uptime())
        .with_writer(std::io::stderr)
        .try_init()
}

/// Install the logger with the filter named by `SEATHEAT_LOG`.
pub fn init_from_env() -> Result<(), InitError> {
    init(filter_for(std::env::var(LEVEL_ENV).ok().as_deref()))
}
