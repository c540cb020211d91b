//! Client configuration

use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "hireboard.toml";

/// Environment prefix for overrides, e.g. `HIREBOARD__API__BASE_URL`
pub const ENV_PREFIX: &str = "HIREBOARD";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default)]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageSettings {
    /// JSON file holding the persisted tokens. Tokens live in memory only
    /// when unset.
    #[serde(default)]
    pub token_file: Option<PathBuf>,
}

impl ClientConfig {
    /// Config pointing at `base_url` with every other setting defaulted
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiSettings {
                base_url: base_url.into(),
                ..default_api()
            },
            storage: StorageSettings::default(),
        }
    }

    /// Load configuration from `hireboard.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration from `path` (if present) and environment
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut settings = config::Config::builder();

        if path.exists() {
            settings = settings.add_source(config::File::from(path.to_path_buf()));
        }

        // Nested keys use a double underscore: HIREBOARD__API__BASE_URL
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(ClientError::Config("api.base_url cannot be empty".to_string()));
        }

        if self.api.timeout_secs == 0 {
            return Err(ClientError::Config(
                "api.timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        base_url: default_base_url(),
        timeout_secs: default_timeout_secs(),
        connect_timeout_secs: default_connect_timeout_secs(),
    }
}

fn default_base_url() -> String {
    "http://localhost:8000/".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for ApiSettings {
    fn default() -> Self {
        default_api()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            storage: StorageSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000/");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.connect_timeout_secs, 10);
        assert!(config.storage.token_file.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hireboard.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"https://jobs.example.com/\"\ntimeout_secs = 5\n\n[storage]\ntoken_file = \"/tmp/hireboard-tokens.json\""
        )
        .unwrap();

        let config = ClientConfig::load_from(&path).unwrap();
        assert_eq!(config.api.base_url, "https://jobs.example.com/");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.connect_timeout_secs, 10);
        assert_eq!(
            config.storage.token_file.as_deref(),
            Some(Path::new("/tmp/hireboard-tokens.json"))
        );
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = ClientConfig::new("http://localhost:8000");
        config.api.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(ClientError::Config(_))));
    }
}
