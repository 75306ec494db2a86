// File: crates/gantt-core/src/config.rs
// Summary: Transport settings (endpoint, timeout, user agent) with TOML loading and validation.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{GanttError, Result};
use crate::types::GOOGLE_CHARTS_API_URL;

/// Default request timeout, seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How to reach the chart service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Endpoint that accepts GET query strings and form POSTs.
    pub base_url: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: GOOGLE_CHARTS_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("gantt-core/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl TransportConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TransportConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "loading transport config");
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), base_url = %config.base_url, "transport config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(GanttError::Config("base_url must not be empty".to_string()));
        }
        if url::Url::parse(&self.base_url).is_err() {
            return Err(GanttError::Config(format!("base_url {:?} is not a valid URL", self.base_url)));
        }
        if self.timeout_secs == 0 {
            return Err(GanttError::Config("timeout_secs must be greater than zero".to_string()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs) }
}
