//! Configuration management for Kicktable.
//!
//! Configuration is optional. Values come from, in increasing precedence:
//! built-in defaults, `config.toml` in the user's config directory, the
//! `KICKTABLE_DATA_URL` environment variable, and command-line flags.

mod settings;

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

pub use settings::Settings;

/// Environment variable overriding the dataset URL.
pub const DATA_URL_ENV: &str = "KICKTABLE_DATA_URL";

/// Configuration file name inside the application config directory.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("Could not determine configuration directory")]
    NoConfigDir,

    /// The config file could not be read.
    #[error("Failed to read configuration: {0}")]
    ReadError(#[from] std::io::Error),

    /// The config file is not valid TOML for [`Settings`].
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A value is present but unusable.
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Loaded application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// The effective settings.
    pub settings: Settings,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load(url_override: Option<&str>) -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path, url_override)
    }

    /// Load configuration from a specific file.
    ///
    /// A missing file yields the defaults. The environment variable and then
    /// `url_override` replace the dataset URL, and only the merged result is
    /// validated.
    pub fn load_from(path: &Path, url_override: Option<&str>) -> Result<Self> {
        let mut settings = if path.exists() {
            debug!(path = %path.display(), "Reading configuration");
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<Settings>(&contents)?
        } else {
            debug!(path = %path.display(), "No configuration file, using defaults");
            Settings::default()
        };

        if let Ok(url) = std::env::var(DATA_URL_ENV) {
            if !url.trim().is_empty() {
                info!("Using dataset URL from {}", DATA_URL_ENV);
                settings.data_url = url;
            }
        }

        if let Some(url) = url_override {
            debug!("Using dataset URL from the command line");
            settings.data_url = url.to_string();
        }

        let config = Self { settings };
        config.validate()?;
        Ok(config)
    }

    /// Path of the default configuration file.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("kicktable").join(CONFIG_FILE_NAME))
    }

    /// Check that the settings are usable.
    pub fn validate(&self) -> Result<()> {
        let url = self.settings.data_url.trim();
        if url.is_empty() {
            return Err(ConfigError::ValidationError(
                "data_url cannot be empty".to_string(),
            ));
        }

        if !url.starts_with("https://") && !url.starts_with("http://") {
            return Err(ConfigError::ValidationError(format!(
                "data_url '{}' must start with http:// or https://",
                url
            )));
        }

        if self.settings.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError(
                "tick_rate_ms must be greater than zero".to_string(),
            ));
        }

        if self.settings.request_timeout_secs == Some(0) {
            return Err(ConfigError::ValidationError(
                "request_timeout_secs must be greater than zero when set".to_string(),
            ));
        }

        Ok(())
    }

    /// The dataset URL.
    pub fn data_url(&self) -> &str {
        self.settings.data_url.trim()
    }

    /// The optional request timeout.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.settings.request_timeout_secs.map(Duration::from_secs)
    }

    /// The event loop tick rate.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.settings.tick_rate_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DEFAULT_DATA_URL;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    #[serial]
    fn test_missing_file_uses_defaults() {
        std::env::remove_var(DATA_URL_ENV);
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml"), None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.data_url(), DEFAULT_DATA_URL);
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    #[serial]
    fn test_load_from_file() {
        std::env::remove_var(DATA_URL_ENV);
        let file = write_config(
            r#"
data_url = "http://localhost:9000/projects.json"
request_timeout_secs = 15
tick_rate_ms = 50
"#,
        );

        let config = Config::load_from(file.path(), None).unwrap();
        assert_eq!(config.data_url(), "http://localhost:9000/projects.json");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.tick_rate(), Duration::from_millis(50));
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let file = write_config(r#"data_url = "https://example.com/a.json""#);
        std::env::set_var(DATA_URL_ENV, "https://example.com/b.json");

        let result = Config::load_from(file.path(), None);
        std::env::remove_var(DATA_URL_ENV);

        assert_eq!(result.unwrap().data_url(), "https://example.com/b.json");
    }

    #[test]
    #[serial]
    fn test_invalid_toml_is_parse_error() {
        std::env::remove_var(DATA_URL_ENV);
        let file = write_config("data_url = [not toml");
        let err = Config::load_from(file.path(), None).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    #[serial]
    fn test_zero_tick_rate_rejected() {
        std::env::remove_var(DATA_URL_ENV);
        let file = write_config("tick_rate_ms = 0");
        let err = Config::load_from(file.path(), None).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    #[serial]
    fn test_url_override_validates() {
        std::env::remove_var(DATA_URL_ENV);
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let config = Config::load_from(&path, Some("https://example.com/data.json")).unwrap();
        assert_eq!(config.data_url(), "https://example.com/data.json");

        let err = Config::load_from(&path, Some("file:///tmp/data.json")).unwrap_err();
        assert!(err.to_string().contains("must start with http"));
    }

    #[test]
    #[serial]
    fn test_url_override_replaces_bad_env_and_file_urls() {
        let file = write_config(r#"data_url = "not a url""#);
        std::env::set_var(DATA_URL_ENV, "ftp://bad.example/x.json");

        let result = Config::load_from(file.path(), Some("https://example.com/good.json"));
        let without_override = Config::load_from(file.path(), None);
        std::env::remove_var(DATA_URL_ENV);

        assert_eq!(result.unwrap().data_url(), "https://example.com/good.json");
        assert!(matches!(
            without_override.unwrap_err(),
            ConfigError::ValidationError(_)
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.settings.request_timeout_secs = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_path_structure() {
        let path = Config::config_path().unwrap();
        assert!(path.ends_with("kicktable/config.toml"));
    }
}
