//! Clinsight — risk-flagging and AI-assistance pipeline for clinical
//! workflow backends.
//!
//! The crate is a library invoked by HTTP controllers that own fetching
//! and persistence; everything here is a request-scoped, stateless
//! computation over records it never writes back:
//!
//! - [`risk::RiskAnalyzer`] scans recent diagnoses, appointments, and
//!   active prescriptions for frequency-based risk patterns.
//! - [`suggestion::SymptomSuggestionEngine`] turns a symptom list into a
//!   structured suggestion via the text-generation gateway, with a
//!   deterministic rule-based fallback.
//! - [`explanation::PrescriptionExplainer`] produces patient-facing
//!   prescription explanations in English or Urdu.
//! - [`gateway::GatewayClient`] is the shared retry/timeout wrapper around
//!   the remote text-completion endpoint; its configuration is injected
//!   via [`config::GatewayConfig`], never read ad hoc from the
//!   environment.
//!
//! Gateway unavailability is an anticipated condition, not an error: every
//! AI-assisted result carries a fallback indicator instead.

pub mod config;
pub mod explanation;
pub mod gateway;
pub mod models;
pub mod risk;
pub mod suggestion;
