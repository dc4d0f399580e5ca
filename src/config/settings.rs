//! Application settings configuration.

use serde::Deserialize;

use crate::api::DEFAULT_DATA_URL;

/// Default event loop tick rate in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 100;

/// Application-wide settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Where the project dataset is fetched from.
    pub data_url: String,
    /// Optional request timeout in seconds. The fetch is unbounded when unset.
    pub request_timeout_secs: Option<u64>,
    /// How often the UI ticks (spinner animation, message polling).
    pub tick_rate_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            request_timeout_secs: None,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.data_url, DEFAULT_DATA_URL);
        assert_eq!(settings.request_timeout_secs, None);
        assert_eq!(settings.tick_rate_ms, 100);
    }

    #[test]
    fn test_settings_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str("request_timeout_secs = 10").unwrap();
        assert_eq!(settings.request_timeout_secs, Some(10));
        assert_eq!(settings.data_url, DEFAULT_DATA_URL);
        assert_eq!(settings.tick_rate_ms, DEFAULT_TICK_RATE_MS);
    }
}
