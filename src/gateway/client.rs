//! HTTP client for the text-generation gateway.

use serde::Serialize;

use super::response::extract_text;
use super::GatewayError;
use crate::config::GatewayConfig;

/// Linear backoff step between attempts.
const BACKOFF_STEP_MS: u64 = 1_000;

/// Seam between the AI-driven engines and the network. Engines hold a
/// `Box<dyn TextGeneration>` so tests can script responses and count calls.
pub trait TextGeneration {
    fn generate(&self, prompt: &str) -> Result<String, GatewayError>;
}

/// Blocking HTTP client for the remote text-completion endpoint.
///
/// Unconfigured clients fail every call with `GatewayError::NotConfigured`
/// without touching the network, which callers treat the same way as an
/// exhausted retry budget: switch to the deterministic fallback.
pub struct GatewayClient {
    config: Option<GatewayConfig>,
    http: reqwest::blocking::Client,
}

/// Request body for the gateway's completion endpoint.
#[derive(Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
}

impl GatewayClient {
    pub fn new(config: GatewayConfig) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config: Some(config),
            http,
        }
    }

    /// A client with no endpoint or key; every call fails fast.
    pub fn unconfigured() -> Self {
        Self {
            config: None,
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Build a client from process environment variables.
    pub fn from_env() -> Self {
        match GatewayConfig::from_env() {
            Some(config) => Self::new(config),
            None => Self::unconfigured(),
        }
    }

    /// Single request attempt. Transport failures, timeouts, and non-2xx
    /// statuses are all transient; the body is probed leniently and never
    /// fails.
    fn attempt(&self, config: &GatewayConfig, prompt: &str) -> Result<String, String> {
        let url = format!("{}?key={}", config.api_url, config.api_key);
        let body = GenerateRequest { prompt };

        let response = self.http.post(&url).json(&body).send().map_err(|e| {
            if e.is_timeout() {
                format!("Request timed out after {}ms", config.timeout_ms)
            } else if e.is_connect() {
                format!("Cannot reach gateway at {}", config.api_url)
            } else {
                e.to_string()
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("Gateway returned status {}", status.as_u16()));
        }

        let body = response.text().map_err(|e| e.to_string())?;
        Ok(extract_text(&body))
    }
}

impl TextGeneration for GatewayClient {
    fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let config = self.config.as_ref().ok_or(GatewayError::NotConfigured)?;
        run_attempts(config.retries, |_attempt| self.attempt(config, prompt))
    }
}

/// Run `retries + 1` attempts with linear backoff between them: after
/// failed attempt `n` (0-based), sleep `1000ms * (n + 1)` before the next.
fn run_attempts<F>(retries: u32, mut attempt_fn: F) -> Result<String, GatewayError>
where
    F: FnMut(u32) -> Result<String, String>,
{
    let mut attempt = 0;
    loop {
        match attempt_fn(attempt) {
            Ok(text) => return Ok(text),
            Err(reason) if attempt >= retries => {
                tracing::error!(
                    attempts = retries + 1,
                    reason = %reason,
                    "Gateway request failed, no attempts left"
                );
                return Err(GatewayError::Unavailable {
                    attempts: retries + 1,
                    reason,
                });
            }
            Err(reason) => {
                tracing::warn!(
                    attempt = attempt + 1,
                    reason = %reason,
                    "Gateway request failed, retrying"
                );
                std::thread::sleep(std::time::Duration::from_millis(
                    BACKOFF_STEP_MS * (u64::from(attempt) + 1),
                ));
                attempt += 1;
            }
        }
    }
}
