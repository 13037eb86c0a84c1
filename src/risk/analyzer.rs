use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use super::keywords::{extract_symptoms, SYMPTOM_VOCABULARY};
use super::prompt::build_risk_narrative_prompt;
use crate::gateway::TextGeneration;
use crate::models::{
    AppointmentRecord, DiagnosisRecord, FlagSeverity, FlagType, PrescriptionRecord,
    PrescriptionStatus, RiskAnalysisResult, RiskFlag,
};

/// Trailing lookback window for diagnoses and appointments.
pub const RISK_WINDOW_DAYS: i64 = 90;

/// Same condition diagnosed this many times in-window raises a flag.
const REPEATED_INFECTION_MIN: u32 = 3;
const REPEATED_INFECTION_HIGH: u32 = 5;

/// Same symptom keyword tallied this many times across in-window diagnoses.
const CHRONIC_SYMPTOM_MIN: u32 = 4;
const CHRONIC_SYMPTOM_HIGH: u32 = 6;

/// In-window appointment counts.
const FREQUENT_VISITS_MIN: usize = 5;
const FREQUENT_VISITS_HIGH: usize = 8;

/// Active prescription count, deliberately not window-filtered.
const POLYPHARMACY_MIN: usize = 5;

/// Diagnosis conditions embedded in the narrative prompt.
const NARRATIVE_CONDITION_LIMIT: usize = 10;

pub(crate) const NO_RISK_SUMMARY: &str = "No significant risk patterns detected.";

/// Scans a patient's recent records for frequency-based risk patterns.
///
/// Construct with a gateway to get a best-effort AI narrative alongside the
/// flags, or [`RiskAnalyzer::without_gateway`] for flags only. Analysis
/// itself never fails and never writes anything.
pub struct RiskAnalyzer {
    gateway: Option<Box<dyn TextGeneration + Send + Sync>>,
}

impl RiskAnalyzer {
    pub fn new(gateway: Box<dyn TextGeneration + Send + Sync>) -> Self {
        Self {
            gateway: Some(gateway),
        }
    }

    pub fn without_gateway() -> Self {
        Self { gateway: None }
    }

    /// Analyze a patient's records as of `now`.
    ///
    /// Diagnoses and appointments are filtered to the trailing 90-day
    /// window; prescriptions are filtered by `active` status regardless of
    /// age. Empty inputs yield an empty-flags result, not an error, and no
    /// gateway call is made when there is nothing to narrate.
    pub fn analyze(
        &self,
        diagnoses: &[DiagnosisRecord],
        prescriptions: &[PrescriptionRecord],
        appointments: &[AppointmentRecord],
        now: DateTime<Utc>,
    ) -> RiskAnalysisResult {
        let cutoff = now - Duration::days(RISK_WINDOW_DAYS);

        let recent_diagnoses: Vec<&DiagnosisRecord> = diagnoses
            .iter()
            .filter(|d| d.created_at >= cutoff)
            .collect();

        let flags = detect_flags(&recent_diagnoses, prescriptions, appointments, cutoff);

        if flags.is_empty() {
            return RiskAnalysisResult {
                flags,
                ai_narrative: None,
                summary_message: NO_RISK_SUMMARY.to_string(),
            };
        }

        let summary_message = summarize(&flags);
        let ai_narrative = self.narrative(&flags, &recent_diagnoses);

        RiskAnalysisResult {
            flags,
            ai_narrative,
            summary_message,
        }
    }

    /// Best-effort narrative. Any gateway failure is swallowed here — the
    /// flags must reach the caller regardless.
    fn narrative(
        &self,
        flags: &[RiskFlag],
        recent_diagnoses: &[&DiagnosisRecord],
    ) -> Option<String> {
        let gateway = self.gateway.as_deref()?;

        let mut newest_first: Vec<&DiagnosisRecord> = recent_diagnoses.to_vec();
        newest_first.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let conditions: Vec<&str> = newest_first
            .iter()
            .take(NARRATIVE_CONDITION_LIMIT)
            .map(|d| d.condition.as_str())
            .collect();

        let prompt = build_risk_narrative_prompt(flags, &conditions);
        match gateway.generate(&prompt) {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::debug!(error = %e, "Risk narrative unavailable, returning flags without it");
                None
            }
        }
    }
}

/// Pure flag detection. Flags are appended in detection order: repeated
/// infections, chronic symptoms, visit frequency, prescription count.
fn detect_flags(
    recent_diagnoses: &[&DiagnosisRecord],
    prescriptions: &[PrescriptionRecord],
    appointments: &[AppointmentRecord],
    cutoff: DateTime<Utc>,
) -> Vec<RiskFlag> {
    let mut flags = Vec::new();

    // Tally condition and symptom-keyword frequencies over one pass.
    // Condition groups keep first-seen order so the output is deterministic.
    let mut condition_order: Vec<String> = Vec::new();
    let mut condition_counts: HashMap<String, u32> = HashMap::new();
    let mut symptom_counts: HashMap<&'static str, u32> = HashMap::new();

    for diagnosis in recent_diagnoses {
        let condition = diagnosis.condition.to_lowercase();
        if !condition_counts.contains_key(&condition) {
            condition_order.push(condition.clone());
        }
        *condition_counts.entry(condition).or_insert(0) += 1;

        for symptom in extract_symptoms(&diagnosis.description) {
            *symptom_counts.entry(symptom).or_insert(0) += 1;
        }
    }

    for condition in &condition_order {
        let count = condition_counts[condition];
        if count >= REPEATED_INFECTION_MIN {
            flags.push(RiskFlag {
                flag_type: FlagType::RepeatedInfection,
                severity: if count >= REPEATED_INFECTION_HIGH {
                    FlagSeverity::High
                } else {
                    FlagSeverity::Medium
                },
                message: format!(
                    "Patient has been diagnosed with \"{condition}\" {count} times in the last {RISK_WINDOW_DAYS} days. Consider further investigation."
                ),
                subject: Some(condition.clone()),
                frequency: count,
                recommendation: "Consider specialist referral or comprehensive diagnostic workup."
                    .to_string(),
            });
        }
    }

    for symptom in SYMPTOM_VOCABULARY {
        let Some(&count) = symptom_counts.get(symptom) else {
            continue;
        };
        if count >= CHRONIC_SYMPTOM_MIN {
            flags.push(RiskFlag {
                flag_type: FlagType::ChronicSymptom,
                severity: if count >= CHRONIC_SYMPTOM_HIGH {
                    FlagSeverity::High
                } else {
                    FlagSeverity::Medium
                },
                message: format!(
                    "Recurring symptom pattern detected: \"{symptom}\" appears {count} times in recent diagnoses."
                ),
                subject: Some((*symptom).to_string()),
                frequency: count,
                recommendation:
                    "Consider chronic condition evaluation and long-term management plan."
                        .to_string(),
            });
        }
    }

    let visit_count = appointments
        .iter()
        .filter(|a| a.start_time >= cutoff)
        .count();
    if visit_count >= FREQUENT_VISITS_MIN {
        flags.push(RiskFlag {
            flag_type: FlagType::HighFrequencyVisits,
            severity: if visit_count >= FREQUENT_VISITS_HIGH {
                FlagSeverity::High
            } else {
                FlagSeverity::Medium
            },
            message: format!(
                "Patient has {visit_count} appointments in the last {RISK_WINDOW_DAYS} days."
            ),
            subject: None,
            frequency: visit_count as u32,
            recommendation:
                "Review overall health status and consider comprehensive health assessment."
                    .to_string(),
        });
    }

    // Intentional asymmetry: all active prescriptions count, regardless of
    // the 90-day window applied to diagnoses and appointments.
    let active_count = prescriptions
        .iter()
        .filter(|p| p.status == PrescriptionStatus::Active)
        .count();
    if active_count >= POLYPHARMACY_MIN {
        flags.push(RiskFlag {
            flag_type: FlagType::MultiplePrescriptions,
            severity: FlagSeverity::Medium,
            message: format!("Patient has {active_count} active prescriptions."),
            subject: None,
            frequency: active_count as u32,
            recommendation: "Review medication interactions and consider medication reconciliation."
                .to_string(),
        });
    }

    flags
}

/// Priority rule for the summary line: high-severity flags dominate, then
/// medium, then a generic count.
fn summarize(flags: &[RiskFlag]) -> String {
    let high = flags
        .iter()
        .filter(|f| f.severity == FlagSeverity::High)
        .count();
    let medium = flags
        .iter()
        .filter(|f| f.severity == FlagSeverity::Medium)
        .count();

    if high > 0 {
        format!("⚠️ {high} high-priority risk flag(s) detected. Immediate attention recommended.")
    } else if medium > 0 {
        format!("⚠️ {medium} medium-priority risk flag(s) detected. Review recommended.")
    } else {
        format!("{} risk flag(s) detected.", flags.len())
    }
}
