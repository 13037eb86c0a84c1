use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(SeverityLevel {
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
    Critical => "critical",
});

str_enum!(PrescriptionStatus {
    Active => "active",
    Expired => "expired",
    Completed => "completed",
});

str_enum!(AppointmentStatus {
    Scheduled => "scheduled",
    InProgress => "in-progress",
    Completed => "completed",
    Cancelled => "cancelled",
});

str_enum!(Gender {
    Male => "male",
    Female => "female",
    Other => "other",
});

str_enum!(FlagType {
    RepeatedInfection => "repeated_infection",
    ChronicSymptom => "chronic_symptom",
    HighFrequencyVisits => "high_frequency_visits",
    MultiplePrescriptions => "multiple_prescriptions",
});

// `Low` is declared for model completeness but no detection rule produces
// it today; the rules emit only `medium` and `high`.
str_enum!(FlagSeverity {
    Low => "low",
    Medium => "medium",
    High => "high",
});

str_enum!(RiskLevel {
    Low => "Low",
    Medium => "Medium",
    High => "High",
    Critical => "Critical",
});

str_enum!(Language {
    English => "english",
    Urdu => "urdu",
});
