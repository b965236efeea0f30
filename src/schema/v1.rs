use serde::{Deserialize, Serialize};

use crate::score::{AlertLevel, DomainScores, Measurement, SubRisks};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Probabilities {
    pub success: f64,
    pub failure: f64,
}

/// Versioned score report written by `--json`. The sub-risk and domain
/// sections expose the intermediate values behind the headline probability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaningQcV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub patient_id: Option<String>,
    pub measurement: Measurement,
    pub sub_risks: SubRisks,
    pub domains: DomainScores,
    pub total_risk: f64,
    pub probabilities: Probabilities,
    pub alert: Alert,
}
