//! Runtime configuration shared by the loader, the remote client and the CLI.
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::io::LoadOptions;

/// Connection and retry policy for the remote compute service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Extra attempts after the first one fails with a transport error or 5xx.
    pub max_retries: u32,
    pub retry_backoff_ms: u64,
    /// Ignore `HTTP_PROXY`-style environment variables.
    pub no_proxy: bool,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout_secs: 30,
            max_retries: 2,
            retry_backoff_ms: 500,
            no_proxy: false,
        }
    }
}

impl RemoteConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumvecConfig {
    pub loader: LoadOptions,
    pub remote: RemoteConfig,
}

/// Load a configuration from a JSON file. Missing fields take their defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<NumvecConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: NumvecConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
