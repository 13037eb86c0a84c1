//! Patient-facing prescription explanations, in English or Urdu, with
//! fixed templated fallbacks when the gateway is unavailable.

pub mod explainer;
pub mod prompt;
pub mod templates;

pub use explainer::*;
pub use prompt::*;
