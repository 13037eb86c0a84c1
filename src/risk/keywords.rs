//! Fixed symptom vocabulary matched against diagnosis descriptions.

/// Keywords tallied across recent diagnosis descriptions. Matching is a
/// case-insensitive substring test, so "chest pain" also counts a hit for
/// "pain" — the chronic-symptom thresholds were tuned with that in mind.
pub const SYMPTOM_VOCABULARY: &[&str] = &[
    "fever",
    "cough",
    "pain",
    "headache",
    "nausea",
    "vomiting",
    "diarrhea",
    "fatigue",
    "dizziness",
    "shortness of breath",
    "chest pain",
    "abdominal pain",
];

/// Extract the vocabulary keywords present in a diagnosis description.
pub fn extract_symptoms(description: &str) -> Vec<&'static str> {
    let lower = description.to_lowercase();
    SYMPTOM_VOCABULARY
        .iter()
        .copied()
        .filter(|keyword| lower.contains(keyword))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(extract_symptoms("Persistent FEVER and fatigue"), vec![
            "fever", "fatigue"
        ]);
    }

    #[test]
    fn substring_match_counts_compound_keywords_twice() {
        // "chest pain" hits both "pain" and "chest pain".
        assert_eq!(extract_symptoms("acute chest pain"), vec![
            "pain",
            "chest pain"
        ]);
    }

    #[test]
    fn no_keywords_yields_empty() {
        assert!(extract_symptoms("routine follow-up, no complaints").is_empty());
    }
}
