pub mod client;
pub mod response;

pub use client::*;
pub use response::*;

use thiserror::Error;

/// Failures the gateway can surface to callers.
///
/// Both variants mean "no AI text available" — callers switch to their
/// deterministic fallback on either. A malformed response body is not an
/// error; it degrades to an empty string inside the response probe.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Text-generation gateway is not configured (missing endpoint URL or API key)")]
    NotConfigured,

    #[error("Text-generation gateway unavailable after {attempts} attempt(s): {reason}")]
    Unavailable { attempts: u32, reason: String },
}
