//! Fixed fallback templates.
//!
//! The Urdu template is a separately maintained literal, not a translation
//! of the English one; both ship as-is and only interpolate the medication
//! names and the prescription's own instructions.

use crate::models::PrescriptionRecord;

fn medication_names(prescription: &PrescriptionRecord) -> String {
    prescription
        .medications
        .iter()
        .map(|m| m.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn english_fallback(prescription: &PrescriptionRecord) -> String {
    format!(
        r#"This prescription includes the following medications: {meds}.

Please follow the instructions provided by your doctor:
- {instructions}

Important reminders:
- Take medications as prescribed
- Complete the full course unless advised otherwise
- Contact your doctor if you experience any unusual side effects
- Keep all medications out of reach of children

Lifestyle Recommendations:
- Maintain a balanced diet
- Stay hydrated
- Get adequate rest
- Follow up with your doctor as scheduled

Preventive Advice:
- Practice good hygiene
- Follow preventive measures as advised
- Monitor your symptoms
- Report any concerns promptly

If you have questions about your prescription, please contact your healthcare provider."#,
        meds = medication_names(prescription),
        instructions = prescription.instructions,
    )
}

pub(crate) fn urdu_fallback(prescription: &PrescriptionRecord) -> String {
    format!(
        r#"یہ نسخہ مندرجہ ذیل ادویات پر مشتمل ہے: {meds}۔

براہ کرم اپنے ڈاکٹر کی دی گئی ہدایات پر عمل کریں:
- {instructions}

اہم یاد دہانیاں:
- ادویات تجویز کردہ طریقے سے لیں
- مکمل کورس مکمل کریں جب تک کہ دوسری صورت میں مشورہ نہ دیا جائے
- اگر آپ کو کوئی غیر معمولی ضمنی اثرات محسوس ہوں تو اپنے ڈاکٹر سے رابطہ کریں
- تمام ادویات بچوں کی پہنچ سے دور رکھیں

اگر آپ کے نسخے کے بارے میں کوئی سوالات ہیں تو براہ کرم اپنے ہیلتھ کیئر فراہم کنندہ سے رابطہ کریں۔"#,
        meds = medication_names(prescription),
        instructions = prescription.instructions,
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::models::{Medication, PrescriptionStatus};

    fn prescription() -> PrescriptionRecord {
        PrescriptionRecord {
            id: Uuid::new_v4(),
            patient_id: Uuid::new_v4(),
            doctor_id: Uuid::new_v4(),
            diagnosis_id: None,
            medications: vec![
                Medication {
                    name: "Amoxicillin".into(),
                    dosage: "500mg".into(),
                    frequency: "three times daily".into(),
                    duration: "7 days".into(),
                    instructions: None,
                },
                Medication {
                    name: "Ibuprofen".into(),
                    dosage: "200mg".into(),
                    frequency: "as needed".into(),
                    duration: "5 days".into(),
                    instructions: None,
                },
            ],
            instructions: "Take with food".into(),
            status: PrescriptionStatus::Active,
            refills_allowed: 0,
            created_at: Utc::now(),
            expires_at: None,
        }
    }

    #[test]
    fn english_template_lists_medications_and_echoes_instructions() {
        let text = english_fallback(&prescription());
        assert!(text.contains("Amoxicillin, Ibuprofen"));
        assert!(text.contains("- Take with food"));
        assert!(text.contains("Important reminders:"));
    }

    #[test]
    fn urdu_template_lists_medications_and_echoes_instructions() {
        let text = urdu_fallback(&prescription());
        assert!(text.contains("Amoxicillin, Ibuprofen"));
        assert!(text.contains("- Take with food"));
        assert!(text.contains("اہم یاد دہانیاں:"));
    }

    #[test]
    fn templates_are_distinct_texts() {
        let rx = prescription();
        assert_ne!(english_fallback(&rx), urdu_fallback(&rx));
    }
}
