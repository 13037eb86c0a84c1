//! Transient outputs produced by the pipeline. Never persisted here.

use serde::{Deserialize, Serialize};

use super::enums::{FlagSeverity, FlagType, Language, RiskLevel};

/// A heuristic warning derived from a patient's recent records.
///
/// `subject` names the condition or symptom keyword the count refers to;
/// it is `None` for the visit-frequency and prescription-count flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFlag {
    #[serde(rename = "type")]
    pub flag_type: FlagType,
    pub severity: FlagSeverity,
    pub message: String,
    pub subject: Option<String>,
    pub frequency: u32,
    pub recommendation: String,
}

/// Result of a risk analysis pass. Flags are in detection order:
/// repeated infections, chronic symptoms, visit frequency, prescription
/// count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAnalysisResult {
    pub flags: Vec<RiskFlag>,
    pub ai_narrative: Option<String>,
    pub summary_message: String,
}

/// One possible condition surfaced by the suggestion engine.
///
/// Lines parsed from gateway prose carry `None` for both optionals; the
/// rule-based fallback fills them from its table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionCandidate {
    pub label: String,
    pub confidence: Option<String>,
    pub icd_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomSuggestion {
    pub conditions: Vec<ConditionCandidate>,
    pub risk_level: RiskLevel,
    pub suggested_tests: Vec<String>,
    pub recommendations: Vec<String>,
    pub warnings: Vec<String>,
    pub disclaimer: String,
    pub used_fallback: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplanationResult {
    pub text: String,
    pub language: Language,
    pub used_fallback: bool,
    pub note: Option<String>,
}
