//! Symptom suggestion engine: prompt the gateway, parse its prose into
//! structured hints, or fall back to a small deterministic rule table.

pub mod engine;
pub mod fallback;
pub mod parser;
pub mod prompt;

pub use engine::*;
pub use fallback::*;
pub use parser::*;
pub use prompt::*;

use crate::models::RiskLevel;

/// Fixed disclaimer attached to every suggestion, AI-backed or not.
pub const DISCLAIMER: &str = "AI suggestions are for reference only. Clinical judgment and patient examination are required for diagnosis.";

/// High and Critical risk levels carry an immediate-consultation warning.
pub(crate) fn warnings_for(risk_level: &RiskLevel) -> Vec<String> {
    match risk_level {
        RiskLevel::High | RiskLevel::Critical => {
            vec!["Consider immediate consultation".to_string()]
        }
        RiskLevel::Low | RiskLevel::Medium => Vec::new(),
    }
}
