use crate::models::RiskFlag;

/// Build the narrative prompt from detected flags and the patient's most
/// recent in-window diagnosis conditions.
pub fn build_risk_narrative_prompt(flags: &[RiskFlag], recent_conditions: &[&str]) -> String {
    let flag_summary = flags
        .iter()
        .map(|flag| format!("{}: {}", flag.flag_type.as_str(), flag.message))
        .collect::<Vec<_>>()
        .join("\n");

    let conditions = if recent_conditions.is_empty() {
        "None".to_string()
    } else {
        recent_conditions.join(", ")
    };

    format!(
        r#"As a medical AI assistant, analyze these patient risk flags:

Risk Flags Detected:
{flag_summary}

Recent Diagnoses:
{conditions}

Provide:
1. Overall risk assessment
2. Potential underlying causes
3. Recommended actions
4. Priority level

Keep response concise and actionable."#
    )
}
