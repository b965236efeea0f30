pub mod engine;

use serde::{Deserialize, Serialize};

/// One set of clinical inputs for the weaning score. All values are plain
/// numbers; range checking happens (if at all) at the input boundary, never
/// inside the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub map_mmhg: f64,
    pub heart_rate: f64,
    pub vasopressor: f64,
    pub ecmo_flow: f64,
    pub sweep_gas: f64,
    pub ecmo_fio2: f64,
    pub vent_fio2: f64,
    pub peep: f64,
    pub driving_pressure: f64,
    pub lactate: f64,
    pub ph: f64,
    pub pao2: f64,
    pub organ_score: f64,
    pub echo_score: f64,
}

/// Per-factor sub-risks, each in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubRisks {
    pub map: f64,
    pub heart_rate: f64,
    pub vasopressor: f64,
    pub pao2: f64,
    pub lactate: f64,
    pub ph: f64,
    pub ecmo_flow: f64,
    pub sweep_gas: f64,
    pub ecmo_fio2: f64,
    pub vent_fio2: f64,
    pub peep: f64,
    pub driving_pressure: f64,
    pub organ: f64,
    pub echo: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainScores {
    pub vitals: f64,
    pub ecmo_support: f64,
    pub organs: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Favorable,
    Borderline,
    Unfavorable,
}

impl AlertLevel {
    /// Classify a rounded success probability. Lower bounds are inclusive:
    /// exactly 75.0 is favorable, exactly 50.0 is borderline.
    pub fn from_success_probability(success: f64) -> Self {
        if success >= 75.0 {
            Self::Favorable
        } else if success >= 50.0 {
            Self::Borderline
        } else {
            Self::Unfavorable
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Favorable => "favorable weaning scenario (demo)",
            Self::Borderline => "borderline - monitor closely (demo)",
            Self::Unfavorable => "unfavorable weaning scenario (demo)",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Favorable => "favorable",
            Self::Borderline => "borderline",
            Self::Unfavorable => "unfavorable",
        }
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    pub success_probability: f64,
    pub failure_probability: f64,
    pub alert_level: AlertLevel,
    pub alert_text: String,
}
