use super::prompt::build_explanation_prompt;
use super::templates::{english_fallback, urdu_fallback};
use crate::gateway::TextGeneration;
use crate::models::{ExplanationResult, Language, PrescriptionRecord};

/// Note attached to fallback results so the caller can render an
/// "AI unavailable" hint without inspecting the text.
pub const FALLBACK_NOTE: &str = "AI service temporarily unavailable. Showing basic explanation.";

/// Produces patient-facing explanations of a prescription. Gateway prose is
/// passed through verbatim; when the gateway is unavailable the fixed
/// bilingual templates take over.
pub struct PrescriptionExplainer {
    gateway: Box<dyn TextGeneration + Send + Sync>,
}

impl PrescriptionExplainer {
    pub fn new(gateway: Box<dyn TextGeneration + Send + Sync>) -> Self {
        Self { gateway }
    }

    pub fn explain(
        &self,
        prescription: &PrescriptionRecord,
        language: Language,
    ) -> ExplanationResult {
        self.explain_with_condition(prescription, None, language)
    }

    /// Like [`explain`](Self::explain), with the linked diagnosis's
    /// condition embedded in the prompt when the caller has resolved it.
    pub fn explain_with_condition(
        &self,
        prescription: &PrescriptionRecord,
        condition: Option<&str>,
        language: Language,
    ) -> ExplanationResult {
        let prompt = build_explanation_prompt(prescription, condition, &language);

        match self.gateway.generate(&prompt) {
            Ok(text) => ExplanationResult {
                text,
                language,
                used_fallback: false,
                note: None,
            },
            Err(e) => {
                tracing::debug!(error = %e, "Gateway unavailable, using templated explanation");
                let text = match language {
                    Language::Urdu => urdu_fallback(prescription),
                    Language::English => english_fallback(prescription),
                };
                ExplanationResult {
                    text,
                    language,
                    used_fallback: true,
                    note: Some(FALLBACK_NOTE.to_string()),
                }
            }
        }
    }
}
