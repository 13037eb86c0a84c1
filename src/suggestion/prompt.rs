use crate::models::{Gender, PatientHistory};

/// Medication names drawn from this many most-recent prescriptions.
const HISTORY_ITEM_LIMIT: usize = 5;

/// Build the symptom-analysis prompt, optionally enriched with a history
/// block (recent conditions, recent medication names, appointment total).
pub fn build_symptom_prompt(
    symptoms: &[String],
    age: Option<u32>,
    gender: Option<&Gender>,
    history: Option<&PatientHistory>,
) -> String {
    let symptom_text = symptoms.join(", ");
    let age_text = age.map_or_else(|| "unknown".to_string(), |a| a.to_string());
    let gender_text = gender.map_or("unknown", Gender::as_str);
    let history_block = history.map_or_else(String::new, history_context);

    format!(
        r#"As a medical AI assistant, analyze these symptoms and provide a structured response:

Patient Information:
- Symptoms: {symptom_text}
- Age: {age_text}
- Gender: {gender_text}{history_block}

Please provide:
1. Top 3-5 possible conditions with ICD codes (if available)
2. Risk level assessment (Low/Medium/High/Critical)
3. Suggested diagnostic tests
4. Immediate recommendations

Format your response clearly with sections for each."#
    )
}

fn history_context(history: &PatientHistory) -> String {
    let conditions = history
        .diagnoses
        .iter()
        .take(HISTORY_ITEM_LIMIT)
        .map(|d| d.condition.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let medications = history
        .prescriptions
        .iter()
        .take(HISTORY_ITEM_LIMIT)
        .flat_map(|p| p.medications.iter().map(|m| m.name.as_str()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "\n\nPatient Medical History:\n- Recent Conditions: {}\n- Recent Medications: {}\n- Total Appointments: {}",
        if conditions.is_empty() { "None" } else { conditions.as_str() },
        if medications.is_empty() { "None" } else { medications.as_str() },
        history.appointment_count,
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::models::{
        DiagnosisRecord, Medication, PrescriptionRecord, PrescriptionStatus, SeverityLevel,
    };

    fn history_with(conditions: &[&str], medications: &[&str]) -> PatientHistory {
        let diagnoses = conditions
            .iter()
            .map(|c| DiagnosisRecord {
                id: Uuid::new_v4(),
                patient_id: Uuid::new_v4(),
                doctor_id: Uuid::new_v4(),
                condition: (*c).into(),
                severity_level: SeverityLevel::Mild,
                description: String::new(),
                created_at: Utc::now(),
            })
            .collect();

        let prescriptions = medications
            .iter()
            .map(|m| PrescriptionRecord {
                id: Uuid::new_v4(),
                patient_id: Uuid::new_v4(),
                doctor_id: Uuid::new_v4(),
                diagnosis_id: None,
                medications: vec![Medication {
                    name: (*m).into(),
                    dosage: "10mg".into(),
                    frequency: "daily".into(),
                    duration: "7 days".into(),
                    instructions: None,
                }],
                instructions: String::new(),
                status: PrescriptionStatus::Active,
                refills_allowed: 0,
                created_at: Utc::now(),
                expires_at: None,
            })
            .collect();

        PatientHistory {
            diagnoses,
            prescriptions,
            appointment_count: 12,
        }
    }

    #[test]
    fn prompt_embeds_symptoms_age_and_gender() {
        let prompt = build_symptom_prompt(
            &["fever".into(), "cough".into()],
            Some(42),
            Some(&Gender::Female),
            None,
        );
        assert!(prompt.contains("- Symptoms: fever, cough"));
        assert!(prompt.contains("- Age: 42"));
        assert!(prompt.contains("- Gender: female"));
        assert!(!prompt.contains("Patient Medical History"));
    }

    #[test]
    fn missing_age_and_gender_render_as_unknown() {
        let prompt = build_symptom_prompt(&["fever".into()], None, None, None);
        assert!(prompt.contains("- Age: unknown"));
        assert!(prompt.contains("- Gender: unknown"));
    }

    #[test]
    fn history_block_lists_conditions_medications_and_count() {
        let history = history_with(&["flu", "bronchitis"], &["Amoxicillin"]);
        let prompt = build_symptom_prompt(&["cough".into()], None, None, Some(&history));
        assert!(prompt.contains("- Recent Conditions: flu, bronchitis"));
        assert!(prompt.contains("- Recent Medications: Amoxicillin"));
        assert!(prompt.contains("- Total Appointments: 12"));
    }

    #[test]
    fn empty_history_lists_render_as_none() {
        let history = history_with(&[], &[]);
        let prompt = build_symptom_prompt(&["cough".into()], None, None, Some(&history));
        assert!(prompt.contains("- Recent Conditions: None"));
        assert!(prompt.contains("- Recent Medications: None"));
    }

    #[test]
    fn history_lists_cap_at_five() {
        let conditions: Vec<&str> = vec!["a", "b", "c", "d", "e", "f", "g"];
        let history = history_with(&conditions, &[]);
        let prompt = build_symptom_prompt(&["cough".into()], None, None, Some(&history));
        assert!(prompt.contains("- Recent Conditions: a, b, c, d, e"));
        assert!(!prompt.contains(", f"));
    }
}
