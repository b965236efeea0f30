use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::score::{AlertLevel, Measurement, ScoreResult};

pub const PATIENT_DOC: &str = "patients.json";

/// One scored measurement in a patient's history. Entries are append-only;
/// nothing ever rewrites or reorders a history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub measurement: Measurement,
    pub success_probability: f64,
    pub alert_level: AlertLevel,
}

impl HistoryEntry {
    pub fn new(timestamp: DateTime<Utc>, measurement: Measurement, result: &ScoreResult) -> Self {
        Self {
            timestamp,
            measurement,
            success_probability: result.success_probability,
            alert_level: result.alert_level,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    pub name: String,
    pub age: u32,
    pub diagnosis: String,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl PatientRecord {
    pub fn new(name: String, age: u32, diagnosis: String) -> Self {
        Self {
            name,
            age,
            diagnosis,
            history: Vec::new(),
        }
    }

    /// Update demographics in place, keeping the measurement history.
    pub fn update_demographics(&mut self, name: String, age: u32, diagnosis: String) {
        self.name = name;
        self.age = age;
        self.diagnosis = diagnosis;
    }
}
