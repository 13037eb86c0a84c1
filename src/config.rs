//! Gateway configuration.
//!
//! The endpoint and key come from the deployment environment, but business
//! logic never reads the environment directly: the config is resolved once
//! and injected into the gateway client, so tests can substitute their own.

/// Environment variable holding the text-generation endpoint URL.
pub const GATEWAY_URL_VAR: &str = "GEMINI_API_URL";
/// Environment variable holding the API key.
pub const GATEWAY_KEY_VAR: &str = "GEMINI_API_KEY";

/// Per-attempt request timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;
/// Retries after the first attempt (so two attempts total).
pub const DEFAULT_RETRIES: u32 = 1;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub api_url: String,
    pub api_key: String,
    pub timeout_ms: u64,
    pub retries: u32,
}

impl GatewayConfig {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            retries: DEFAULT_RETRIES,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Resolve the config from process environment variables.
    ///
    /// Returns `None` when either variable is missing or empty — the
    /// gateway is then unconfigured and every call fails fast with a
    /// configuration error rather than a network error.
    pub fn from_env() -> Option<Self> {
        Self::from_vars(
            std::env::var(GATEWAY_URL_VAR).ok(),
            std::env::var(GATEWAY_KEY_VAR).ok(),
        )
    }

    fn from_vars(url: Option<String>, key: Option<String>) -> Option<Self> {
        match (url, key) {
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty() => {
                Some(Self::new(url, key))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_gateway_contract() {
        let config = GatewayConfig::new("https://gateway.example", "k");
        assert_eq!(config.timeout_ms, 15_000);
        assert_eq!(config.retries, 1);
    }

    #[test]
    fn builder_overrides_apply() {
        let config = GatewayConfig::new("https://gateway.example", "k")
            .with_timeout_ms(2_000)
            .with_retries(0);
        assert_eq!(config.timeout_ms, 2_000);
        assert_eq!(config.retries, 0);
    }

    #[test]
    fn missing_url_or_key_yields_none() {
        assert!(GatewayConfig::from_vars(None, Some("k".into())).is_none());
        assert!(GatewayConfig::from_vars(Some("u".into()), None).is_none());
        assert!(GatewayConfig::from_vars(Some(String::new()), Some("k".into())).is_none());
    }

    #[test]
    fn both_vars_present_yields_config() {
        let config = GatewayConfig::from_vars(Some("u".into()), Some("k".into())).unwrap();
        assert_eq!(config.api_url, "u");
        assert_eq!(config.api_key, "k");
    }
}
