// ==========================================
// Luggage Fulfillment Tracking - Client Configuration
// ==========================================
// Endpoint settings for the hosted Apps Script. Defaults point at the
// production deployment; both can be overridden via environment.
// ==========================================

use std::env;
use std::time::Duration;

/// Production Apps Script deployment URL.
pub const DEFAULT_ENDPOINT_URL: &str =
    "https://script.google.com/macros/s/AKfycby8eck5OD23r0adNvZjG4VNZu6Y55AzsRjj_TTSXV0f73_aCE80sHRnpp8v23bSq8oquw/exec";

/// Default whole-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment overrides.
pub const ENV_ENDPOINT_URL: &str = "FULFILLMENT_SHEET_URL";
pub const ENV_TIMEOUT_SECS: &str = "FULFILLMENT_HTTP_TIMEOUT_SECS";

// ==========================================
// ClientConfig
// ==========================================
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ENDPOINT_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Build the config from environment overrides, falling back to the
    /// production defaults.
    ///
    /// # Environment
    /// - FULFILLMENT_SHEET_URL: endpoint URL
    /// - FULFILLMENT_HTTP_TIMEOUT_SECS: whole-request timeout (seconds)
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var(ENV_ENDPOINT_URL) {
            if !url.trim().is_empty() {
                config.base_url = url.trim().to_string();
            }
        }
        if let Ok(secs) = env::var(ENV_TIMEOUT_SECS) {
            if let Ok(secs) = secs.trim().parse::<u64>() {
                config.timeout = Duration::from_secs(secs);
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_ENDPOINT_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
