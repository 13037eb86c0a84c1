use super::fallback::{fallback_suggestion, sentinel_condition};
use super::parser::{parse_risk_level, parse_structured_hints};
use super::prompt::build_symptom_prompt;
use super::{warnings_for, DISCLAIMER};
use crate::gateway::TextGeneration;
use crate::models::{ConditionCandidate, Gender, PatientHistory, SymptomSuggestion};

/// Turns a symptom list into a structured suggestion via the gateway, with
/// a deterministic rule-based fallback when the gateway is unavailable.
///
/// Callers validate that `symptoms` is non-empty before invoking; this
/// engine does not re-check.
pub struct SymptomSuggestionEngine {
    gateway: Box<dyn TextGeneration + Send + Sync>,
}

impl SymptomSuggestionEngine {
    pub fn new(gateway: Box<dyn TextGeneration + Send + Sync>) -> Self {
        Self { gateway }
    }

    pub fn suggest(
        &self,
        symptoms: &[String],
        age: Option<u32>,
        gender: Option<&Gender>,
        history: Option<&PatientHistory>,
    ) -> SymptomSuggestion {
        let prompt = build_symptom_prompt(symptoms, age, gender, history);

        match self.gateway.generate(&prompt) {
            Ok(text) => assemble(&text),
            // Gateway availability is the only anticipated failure mode;
            // both error variants route to the rule-based fallback.
            Err(e) => {
                tracing::debug!(error = %e, "Gateway unavailable, using rule-based symptom fallback");
                fallback_suggestion(symptoms)
            }
        }
    }
}

/// Assemble a suggestion from gateway prose. Parsing is heuristic; an
/// answer that yields no condition lines still produces the sentinel entry
/// so the caller always sees at least one condition.
fn assemble(text: &str) -> SymptomSuggestion {
    let hints = parse_structured_hints(text);
    let risk_level = parse_risk_level(text);

    let conditions: Vec<ConditionCandidate> = if hints.conditions.is_empty() {
        vec![sentinel_condition()]
    } else {
        hints
            .conditions
            .into_iter()
            .map(|label| ConditionCandidate {
                label,
                confidence: None,
                icd_code: None,
            })
            .collect()
    };

    let warnings = warnings_for(&risk_level);

    SymptomSuggestion {
        conditions,
        risk_level,
        suggested_tests: hints.tests,
        recommendations: hints.recommendations,
        warnings,
        disclaimer: DISCLAIMER.to_string(),
        used_fallback: false,
    }
}
