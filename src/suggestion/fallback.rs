//! Deterministic rule-based suggestions for when the gateway is down.

use super::{warnings_for, DISCLAIMER};
use crate::models::{ConditionCandidate, RiskLevel, SymptomSuggestion};

/// Sentinel entry used when nothing more specific can be said.
pub(crate) fn sentinel_condition() -> ConditionCandidate {
    ConditionCandidate {
        label: "Symptom Evaluation Needed".to_string(),
        confidence: Some("N/A".to_string()),
        icd_code: None,
    }
}

/// Rule-based substitute for the gateway path. Rules are applied in a
/// fixed order and each sets the risk level directly, so a later match
/// overrides an earlier one.
pub fn fallback_suggestion(symptoms: &[String]) -> SymptomSuggestion {
    let joined = symptoms.join(", ").to_lowercase();

    let mut conditions: Vec<ConditionCandidate> = Vec::new();
    let mut suggested_tests: Vec<String> = Vec::new();
    let mut risk_level = RiskLevel::Low;

    if joined.contains("fever") && joined.contains("cough") {
        conditions.push(ConditionCandidate {
            label: "Upper Respiratory Infection".to_string(),
            confidence: Some("65%".to_string()),
            icd_code: Some("J00".to_string()),
        });
        suggested_tests.push("Complete Blood Count (CBC)".to_string());
        suggested_tests.push("Chest X-ray if persistent".to_string());
        risk_level = RiskLevel::Medium;
    }

    if joined.contains("chest pain") {
        conditions.push(ConditionCandidate {
            label: "Chest Pain - Requires Evaluation".to_string(),
            confidence: Some("N/A".to_string()),
            icd_code: Some("R06.02".to_string()),
        });
        suggested_tests.push("ECG".to_string());
        suggested_tests.push("Troponin levels".to_string());
        suggested_tests.push("Chest X-ray".to_string());
        risk_level = RiskLevel::High;
    }

    if joined.contains("abdominal pain") {
        conditions.push(ConditionCandidate {
            label: "Abdominal Pain".to_string(),
            confidence: Some("50%".to_string()),
            icd_code: Some("R10.9".to_string()),
        });
        suggested_tests.push("Complete Blood Count".to_string());
        suggested_tests.push("Abdominal Ultrasound".to_string());
        risk_level = RiskLevel::Medium;
    }

    if conditions.is_empty() {
        conditions.push(sentinel_condition());
        suggested_tests.push("Physical Examination".to_string());
        suggested_tests.push("Basic Blood Work".to_string());
    }

    let warnings = warnings_for(&risk_level);

    SymptomSuggestion {
        conditions,
        risk_level,
        suggested_tests,
        recommendations: vec![
            "Physical examination required".to_string(),
            "Monitor symptoms".to_string(),
            "Follow up if symptoms worsen".to_string(),
        ],
        warnings,
        disclaimer: DISCLAIMER.to_string(),
        used_fallback: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chest_pain_rule_is_high_risk_with_warning() {
        let suggestion = fallback_suggestion(&["severe chest pain".into()]);

        assert_eq!(suggestion.risk_level, RiskLevel::High);
        assert_eq!(suggestion.conditions[0].label, "Chest Pain - Requires Evaluation");
        assert_eq!(suggestion.conditions[0].icd_code.as_deref(), Some("R06.02"));
        assert_eq!(suggestion.warnings, vec!["Consider immediate consultation"]);
        assert!(suggestion.used_fallback);
        assert!(suggestion.suggested_tests.contains(&"ECG".to_string()));
    }

    #[test]
    fn fever_and_cough_suggest_respiratory_infection() {
        let suggestion = fallback_suggestion(&["fever".into(), "dry cough".into()]);

        assert_eq!(suggestion.risk_level, RiskLevel::Medium);
        assert_eq!(suggestion.conditions[0].label, "Upper Respiratory Infection");
        assert_eq!(suggestion.conditions[0].confidence.as_deref(), Some("65%"));
        assert!(suggestion.warnings.is_empty());
    }

    #[test]
    fn unmatched_symptoms_get_sentinel_and_low_risk() {
        let suggestion = fallback_suggestion(&["itchy elbow".into()]);

        assert_eq!(suggestion.risk_level, RiskLevel::Low);
        assert_eq!(suggestion.conditions.len(), 1);
        assert_eq!(suggestion.conditions[0].label, "Symptom Evaluation Needed");
        assert_eq!(suggestion.suggested_tests, vec![
            "Physical Examination",
            "Basic Blood Work"
        ]);
    }

    #[test]
    fn later_rule_overrides_risk_level() {
        // Chest pain sets High, then the abdominal rule lowers it to
        // Medium. Faithful to the rule table's assignment semantics.
        let suggestion = fallback_suggestion(&["chest pain".into(), "abdominal pain".into()]);

        assert_eq!(suggestion.conditions.len(), 2);
        assert_eq!(suggestion.risk_level, RiskLevel::Medium);
        assert!(suggestion.warnings.is_empty());
    }

    #[test]
    fn disclaimer_and_recommendations_always_present() {
        let suggestion = fallback_suggestion(&["anything".into()]);
        assert_eq!(suggestion.disclaimer, DISCLAIMER);
        assert_eq!(suggestion.recommendations.len(), 3);
    }
}
