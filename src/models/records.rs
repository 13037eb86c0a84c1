//! Clinical records consumed read-only by the analysis pipeline.
//!
//! These mirror the shapes owned by the clinical record store. The pipeline
//! never writes them back; persistence is the caller's concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{AppointmentStatus, PrescriptionStatus, SeverityLevel};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub condition: String,
    pub severity_level: SeverityLevel,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// A single medication line within a prescription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrescriptionRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub diagnosis_id: Option<Uuid>,
    pub medications: Vec<Medication>,
    pub instructions: String,
    pub status: PrescriptionStatus,
    pub refills_allowed: u32,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub status: AppointmentStatus,
}

/// Optional patient history handed to the symptom suggestion engine to
/// enrich the prompt. `appointment_count` is the total on record, not a
/// windowed count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientHistory {
    pub diagnoses: Vec<DiagnosisRecord>,
    pub prescriptions: Vec<PrescriptionRecord>,
    pub appointment_count: u32,
}
