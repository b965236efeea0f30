use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::patient::HistoryEntry;

/// Write a patient's measurement history as TSV, one row per entry in
/// append order.
pub fn write_history_tsv(path: &Path, history: &[HistoryEntry]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(
        w,
        "timestamp\tmap_mmhg\theart_rate\tvasopressor\tecmo_flow\tsweep_gas\tecmo_fio2\tvent_fio2\tpeep\tdriving_pressure\tlactate\tph\tpao2\torgan_score\techo_score\tsuccess_probability\talert_level"
    )?;
    for entry in history {
        let m = &entry.measurement;
        writeln!(
            w,
            "{}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.1}\t{}",
            entry.timestamp.to_rfc3339(),
            m.map_mmhg,
            m.heart_rate,
            m.vasopressor,
            m.ecmo_flow,
            m.sweep_gas,
            m.ecmo_fio2,
            m.vent_fio2,
            m.peep,
            m.driving_pressure,
            m.lactate,
            m.ph,
            m.pao2,
            m.organ_score,
            m.echo_score,
            entry.success_probability,
            entry.alert_level
        )?;
    }

    Ok(())
}
