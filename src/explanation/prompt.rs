use crate::models::{Language, PrescriptionRecord};

/// Build the explanation prompt for a prescription.
///
/// `condition` is the linked diagnosis's condition when the caller has it
/// on hand; the line reads "Not specified" otherwise.
pub fn build_explanation_prompt(
    prescription: &PrescriptionRecord,
    condition: Option<&str>,
    language: &Language,
) -> String {
    let medications_list = prescription
        .medications
        .iter()
        .map(|m| format!("{} ({}, {}, {})", m.name, m.dosage, m.frequency, m.duration))
        .collect::<Vec<_>>()
        .join(", ");

    let duration = prescription
        .medications
        .first()
        .map(|m| m.duration.as_str())
        .unwrap_or("As prescribed");

    let (language_name, language_instruction) = match language {
        Language::Urdu => ("Urdu", "Please respond in Urdu (Roman Urdu or Urdu script)."),
        Language::English => ("English", "Please respond in English."),
    };

    format!(
        r#"As a medical AI assistant, explain this prescription in simple, patient-friendly {language_name}:

Prescription Details:
- Condition: {condition}
- Medications: {medications_list}
- Instructions: {instructions}
- Duration: {duration}

Please provide:
1. What each medication does (in simple terms)
2. Why it was prescribed
3. Important things to remember when taking it
4. Potential side effects to watch for
5. When to contact the doctor
6. Lifestyle recommendations (diet, exercise, rest, etc.)
7. Preventive advice to avoid recurrence

{language_instruction}

Keep the explanation clear, concise, and easy to understand for a patient."#,
        condition = condition.unwrap_or("Not specified"),
        instructions = prescription.instructions,
    )
}
