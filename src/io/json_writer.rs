use std::path::Path;

use anyhow::{Context, Result};

use crate::patient::HistoryEntry;
use crate::schema::v1::{Alert, Probabilities, WeaningQcV1};
use crate::score::engine;
use crate::score::{Measurement, ScoreResult};

pub fn build_report(
    m: &Measurement,
    result: &ScoreResult,
    patient_id: Option<&str>,
) -> WeaningQcV1 {
    let sub_risks = engine::sub_risks(m);
    let domains = engine::domain_scores(&sub_risks);
    let total_risk = engine::total_risk(&domains);

    WeaningQcV1 {
        tool: "ecmo-weanqc".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        patient_id: patient_id.map(|s| s.to_string()),
        measurement: m.clone(),
        sub_risks,
        domains,
        total_risk,
        probabilities: Probabilities {
            success: result.success_probability,
            failure: result.failure_probability,
        },
        alert: Alert {
            level: result.alert_level,
            text: result.alert_text.clone(),
        },
    }
}

pub fn write_report(
    path: &Path,
    m: &Measurement,
    result: &ScoreResult,
    patient_id: Option<&str>,
) -> Result<()> {
    let report = build_report(m, result, patient_id);
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}

pub fn write_history(path: &Path, patient_id: &str, history: &[HistoryEntry]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    let doc = serde_json::json!({
        "tool": "ecmo-weanqc",
        "version": env!("CARGO_PKG_VERSION"),
        "patient_id": patient_id,
        "history": history,
    });
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}
