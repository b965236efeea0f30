use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use ecmo_weanqc::cli::{
    CaseCommand, Cli, Commands, HistoryArgs, PatientCommand, ScoreArgs,
};
use ecmo_weanqc::io;
use ecmo_weanqc::patient::{HistoryEntry, PATIENT_DOC, PatientRecord};
use ecmo_weanqc::score::engine;
use ecmo_weanqc::score::Measurement;
use ecmo_weanqc::store::{JsonStore, Repository};
use ecmo_weanqc::study::{STUDY_DOC, StudyCase};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score(args) => handle_score(args)?,
        Commands::Patient(args) => match args.command {
            PatientCommand::Add(args) => {
                let mut store = open_patients(&args.data_dir)?;
                let record = match store.get(&args.id)? {
                    Some(mut existing) => {
                        existing.update_demographics(args.name, args.age, args.diagnosis);
                        existing
                    }
                    None => PatientRecord::new(args.name, args.age, args.diagnosis),
                };
                store.upsert(&args.id, record)?;
                store.save()?;
                tracing::info!(patient = %args.id, "patient_saved");
                println!("patient {} saved", args.id);
            }
            PatientCommand::List(args) => {
                let store = open_patients(&args.data_dir)?;
                print_patient_list(&store);
            }
            PatientCommand::Show(args) => {
                let store = open_patients(&args.data_dir)?;
                let record = store
                    .get(&args.id)?
                    .with_context(|| format!("unknown patient id {}", args.id))?;
                let json = serde_json::to_string_pretty(&record)?;
                println!("{}", json);
            }
            PatientCommand::Delete(args) => {
                let mut store = open_patients(&args.data_dir)?;
                if !store.delete(&args.id)? {
                    bail!("unknown patient id {}", args.id);
                }
                store.save()?;
                tracing::info!(patient = %args.id, "patient_deleted");
                println!("patient {} deleted", args.id);
            }
        },
        Commands::History(args) => handle_history(args)?,
        Commands::Case(args) => match args.command {
            CaseCommand::Upsert(args) => {
                let text = std::fs::read_to_string(&args.file)
                    .with_context(|| format!("failed to read {}", args.file.display()))?;
                let case: StudyCase = serde_json::from_str(&text)
                    .with_context(|| format!("invalid study case in {}", args.file.display()))?;
                if case.key().is_empty() {
                    bail!("study_id must not be empty; it is the key for this case");
                }
                let key = case.key().to_string();
                let mut store = open_cases(&args.data_dir)?;
                store.upsert(&key, case)?;
                store.save()?;
                tracing::info!(case = %key, "study_case_saved");
                println!("case {} saved", key);
            }
            CaseCommand::List(args) => {
                let store = open_cases(&args.data_dir)?;
                print_case_list(&store);
            }
            CaseCommand::Show(args) => {
                let store = open_cases(&args.data_dir)?;
                let case = store
                    .get(&args.id)?
                    .with_context(|| format!("unknown study id {}", args.id))?;
                let json = serde_json::to_string_pretty(&case)?;
                println!("{}", json);
            }
            CaseCommand::Delete(args) => {
                let mut store = open_cases(&args.data_dir)?;
                if !store.delete(&args.id)? {
                    bail!("unknown study id {}", args.id);
                }
                store.save()?;
                tracing::info!(case = %args.id, "study_case_deleted");
                println!("case {} deleted", args.id);
            }
        },
    }

    Ok(())
}

fn handle_score(args: ScoreArgs) -> Result<()> {
    let measurement = Measurement {
        map_mmhg: args.map,
        heart_rate: args.hr,
        vasopressor: args.vaso,
        ecmo_flow: args.flow,
        sweep_gas: args.sweep,
        ecmo_fio2: args.ecmo_fio2,
        vent_fio2: args.vent_fio2,
        peep: args.peep,
        driving_pressure: args.dp,
        lactate: args.lactate,
        ph: args.ph,
        pao2: args.pao2,
        organ_score: args.organ,
        echo_score: args.echo,
    };
    let result = engine::score(&measurement);
    tracing::info!(
        success = result.success_probability,
        alert = %result.alert_level,
        "score_computed"
    );

    // append before writing the report, so a failed patient lookup leaves
    // no partial output behind
    if let Some(patient_id) = &args.patient {
        let mut store = open_patients(&args.data_dir)?;
        let mut record = store
            .get(patient_id)?
            .with_context(|| format!("unknown patient id {}; add it first", patient_id))?;
        record
            .history
            .push(HistoryEntry::new(Utc::now(), measurement.clone(), &result));
        store.upsert(patient_id, record)?;
        store.save()?;
        tracing::info!(patient = %patient_id, "measurement_appended");
    }

    if let Some(path) = &args.json {
        io::json_writer::write_report(path, &measurement, &result, args.patient.as_deref())?;
        tracing::info!(path = %path.display(), "report_written");
    }

    print!(
        "{}",
        io::summary::format_summary(&measurement, &result, args.patient.as_deref())
    );
    Ok(())
}

fn handle_history(args: HistoryArgs) -> Result<()> {
    let store = open_patients(&args.data_dir)?;
    let record = store
        .get(&args.patient)?
        .with_context(|| format!("unknown patient id {}", args.patient))?;

    if record.history.is_empty() {
        println!("no measurements recorded for {}", args.patient);
        return Ok(());
    }

    println!(
        "history for {} ({}, {} years): {} measurements",
        args.patient,
        record.name,
        record.age,
        record.history.len()
    );
    println!("timestamp\tsuccess_probability\talert_level");
    for entry in &record.history {
        println!(
            "{}\t{:.1}\t{}",
            entry.timestamp.to_rfc3339(),
            entry.success_probability,
            entry.alert_level
        );
    }

    if let Some(path) = &args.tsv {
        io::tsv_writer::write_history_tsv(path, &record.history)?;
        tracing::info!(path = %path.display(), "history_tsv_written");
    }
    if let Some(path) = &args.json {
        io::json_writer::write_history(path, &args.patient, &record.history)?;
        tracing::info!(path = %path.display(), "history_json_written");
    }
    Ok(())
}

fn open_patients(data_dir: &Path) -> Result<JsonStore<PatientRecord>> {
    JsonStore::open(data_dir.join(PATIENT_DOC))
}

fn open_cases(data_dir: &Path) -> Result<JsonStore<StudyCase>> {
    JsonStore::open(data_dir.join(STUDY_DOC))
}

fn print_patient_list(store: &JsonStore<PatientRecord>) {
    if store.is_empty() {
        println!("no patients recorded");
        return;
    }
    println!("id\tname\tage\tdiagnosis\tmeasurements");
    for (id, record) in store.iter() {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            id,
            record.name,
            record.age,
            record.diagnosis,
            record.history.len()
        );
    }
}

fn print_case_list(store: &JsonStore<StudyCase>) {
    if store.is_empty() {
        println!("no study cases recorded");
        return;
    }
    println!("study_id\tcenter\timplantation_date\tage\tmain_diagnosis");
    for (id, case) in store.iter() {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            id, case.center, case.implantation_date, case.age, case.main_diagnosis
        );
    }
}
