use crate::score::engine;
use crate::score::{Measurement, ScoreResult};

/// Human-readable result block for the `score` command.
pub fn format_summary(
    m: &Measurement,
    result: &ScoreResult,
    patient_id: Option<&str>,
) -> String {
    let version = env!("CARGO_PKG_VERSION");
    let domains = engine::domain_scores(&engine::sub_risks(m));

    let mut out = String::new();
    out.push_str(&format!("ecmo-weanqc v{}\n", version));
    if let Some(id) = patient_id {
        out.push_str(&format!("Patient: {}\n", id));
    }
    out.push_str(&format!(
        "Success probability: {:.1} %\n",
        result.success_probability
    ));
    out.push_str(&format!(
        "Failure probability: {:.1} %\n",
        result.failure_probability
    ));
    out.push_str(&format!("Alert: {}\n", result.alert_text));
    out.push_str(&format!(
        "Domains: vitals={:.4} ecmo_support={:.4} organs={:.4}\n",
        domains.vitals, domains.ecmo_support, domains.organs
    ));
    out
}
