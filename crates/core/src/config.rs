use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Agent used when nothing else is configured.
pub const DEFAULT_AGENT_URL: &str = "http://localhost:7080";

/// BosunConfig represents the contents of a bosun.yaml file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BosunConfig {
    /// Base URL of the orchestrator agent serving build records.
    pub agent_url: Option<String>,
}

impl BosunConfig {
    /// Loads a BosunConfig from a bosun.yaml file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;

        Self::from_str(&contents)
    }

    /// Parses a BosunConfig from a YAML string.
    ///
    /// An empty document is a valid, empty config.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed or `agent_url` is not a string.
    pub fn from_str(yaml: &str) -> Result<Self, ConfigError> {
        let raw: serde_yaml::Value =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;

        if raw.is_null() {
            return Ok(Self::default());
        }

        let agent_url = match raw.get("agent_url") {
            None => None,
            Some(v) => Some(
                v.as_str()
                    .ok_or_else(|| ConfigError::InvalidField("agent_url".to_string()))?
                    .to_string(),
            ),
        };

        Ok(BosunConfig { agent_url })
    }

    /// Picks the agent URL to use.
    ///
    /// Resolution order:
    /// 1. `cli`, from `--agent-url` or `BOSUN_AGENT_URL`.
    /// 2. `agent_url` from this config.
    /// 3. [`DEFAULT_AGENT_URL`].
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen value is not an absolute http(s) URL with a host.
    pub fn resolve_agent_url(&self, cli: Option<&str>) -> Result<String, ConfigError> {
        let url = cli
            .or(self.agent_url.as_deref())
            .unwrap_or(DEFAULT_AGENT_URL);

        let parsed = Url::parse(url).map_err(|_| ConfigError::InvalidUrl(url.to_string()))?;
        let http = matches!(parsed.scheme(), "http" | "https");
        let has_host = parsed.host_str().is_some_and(|h| !h.is_empty());
        if !http || !has_host {
            return Err(ConfigError::InvalidUrl(url.to_string()));
        }

        Ok(url.trim_end_matches('/').to_string())
    }
}

/// Errors that can occur when loading or resolving configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid value for field: {0}")]
    InvalidField(String),
    #[error("Invalid agent URL: {0}. Expected http:// or https://")]
    InvalidUrl(String),
}
