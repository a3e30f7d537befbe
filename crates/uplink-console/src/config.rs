//! Console configuration
//!
//! Layers, lowest to highest precedence:
//! 1. built-in defaults
//! 2. TOML file (`--config`)
//! 3. `UPLINK_BASE_URL` environment variable
//! 4. command-line flags

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use uplink_client::ClientConfig;

/// Environment variable overriding the API root
pub const BASE_URL_ENV: &str = "UPLINK_BASE_URL";

/// Filter used when neither the file nor `RUST_LOG` sets one
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// tracing filter directive, e.g. `uplink_view=debug`
    pub log_filter: String,
    pub client: ClientConfig,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            client: ClientConfig::default(),
        }
    }
}

impl ConsoleConfig {
    /// Defaults, or the given TOML file on top of them
    ///
    /// # Errors
    /// If the file cannot be read or is not valid configuration.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Parse TOML text
    ///
    /// # Errors
    /// If the text is not valid configuration.
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Apply environment overrides through `lookup`
    #[must_use]
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.client.base_url = base_url;
        }
        self
    }

    /// Apply command-line overrides
    #[must_use]
    pub fn with_flags(mut self, base_url: Option<&str>, timeout_secs: Option<u64>) -> Self {
        if let Some(base_url) = base_url {
            self.client.base_url = base_url.to_string();
        }
        if let Some(secs) = timeout_secs {
            self.client = self.client.with_timeout(Duration::from_secs(secs));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_path_gives_defaults() {
        let config = ConsoleConfig::load(None).unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn loads_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "log_filter = \"uplink_view=debug\"\n[client]\nbase_url = \"https://ops.example.net/api\""
        )
        .unwrap();

        let config = ConsoleConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.log_filter, "uplink_view=debug");
        assert_eq!(config.client.base_url, "https://ops.example.net/api");
        assert!(config.client.timeout().is_none());
    }

    #[test]
    fn bad_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "client = 3").unwrap();

        let err = ConsoleConfig::load(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config file"));
    }

    #[test]
    fn flags_override_env_override_file() {
        let config = ConsoleConfig::from_toml("[client]\nbase_url = \"http://file\"")
            .unwrap()
            .with_env(|key| (key == BASE_URL_ENV).then(|| "http://env".to_string()));
        assert_eq!(config.client.base_url, "http://env");

        let config = config.with_flags(Some("http://flag"), Some(3));
        assert_eq!(config.client.base_url, "http://flag");
        assert_eq!(config.client.timeout(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn zero_timeout_flag_clears_file_timeout() {
        let config = ConsoleConfig::from_toml("[client]\ntimeout_secs = 9")
            .unwrap()
            .with_flags(None, Some(0));
        assert!(config.client.timeout().is_none());
    }

    #[test]
    fn blank_env_is_ignored() {
        let config = ConsoleConfig::default().with_env(|_| Some("  ".to_string()));
        assert_eq!(config.client.base_url, ClientConfig::default().base_url);
    }
}
