//! JSON file configuration adapter.
//!
//! The file named by `SEATHEAT_CONFIG` holds a (possibly partial)
//! [`ControllerConfig`]; missing keys keep their defaults.  With the
//! variable unset the defaults are used as-is.
//!
//! ```json
//! { "conversion_period_ms": 250, "button_debounce_ms": 200 }
//! ```

use std::path::PathBuf;

use log::{info, warn};

use crate::app::ports::ConfigPort;
use crate::config::ControllerConfig;
use crate::error::{Error, Result};

pub const CONFIG_ENV: &str = "SEATHEAT_CONFIG";

pub struct JsonFileConfig {
    path: Option<PathBuf>,
}

impl JsonFileConfig {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }
}

/// Parse and validate a JSON configuration document.
pub fn parse(text: &str) -> Result<ControllerConfig> {
    let config: ControllerConfig = serde_json::from_str(text).map_err(|e| {
        warn!("config parse error: {}", e);
        Error::Config("malformed JSON")
    })?;
    config.validate()?;
    Ok(config)
}

impl ConfigPort for JsonFileConfig {
    fn load(&self) -> Result<ControllerConfig> {
        let Some(path) = &self.path else {
            info!("no {} set, using default configuration", CONFIG_ENV);
            return Ok(ControllerConfig::default());
        };
        let text = std::fs::read_to_string(path).map_err(|e| {
            warn!("cannot read {}: {}", path.display(), e);
            Error::Config("config file unreadable")
        })?;
        let config = parse(&text)?;
        info!("configuration loaded from {}", path.display());
        Ok(config)
    }
}
