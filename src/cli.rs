use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ecmo-weanqc", version, about = "VA-ECMO weaning study CLI (demo scoring)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute the weaning score for one set of measurements
    Score(ScoreArgs),
    /// Manage patient records
    Patient(PatientArgs),
    /// Show a patient's measurement history
    History(HistoryArgs),
    /// Manage pseudonymized 30CERW study cases
    Case(CaseArgs),
}

#[derive(Debug, Args)]
pub struct ScoreArgs {
    #[arg(long, default_value_t = 70.0, help = "Mean arterial pressure (mmHg)")]
    pub map: f64,

    #[arg(long, default_value_t = 85.0, help = "Heart rate (/min)")]
    pub hr: f64,

    #[arg(long, default_value_t = 3.0, help = "Vasopressor requirement (0-10)")]
    pub vaso: f64,

    #[arg(long, default_value_t = 3.2, help = "ECMO blood flow (L/min)")]
    pub flow: f64,

    #[arg(long, default_value_t = 2.0, help = "Sweep gas flow (L/min)")]
    pub sweep: f64,

    #[arg(long, default_value_t = 0.6, help = "ECMO FiO2 (0-1)")]
    pub ecmo_fio2: f64,

    #[arg(long, default_value_t = 0.5, help = "Ventilator FiO2 (0-1)")]
    pub vent_fio2: f64,

    #[arg(long, default_value_t = 10.0, help = "PEEP (cmH2O)")]
    pub peep: f64,

    #[arg(long, default_value_t = 12.0, help = "Driving pressure (cmH2O)")]
    pub dp: f64,

    #[arg(long, default_value_t = 2.0, help = "Lactate (mmol/L)")]
    pub lactate: f64,

    #[arg(long, default_value_t = 7.38)]
    pub ph: f64,

    #[arg(long, default_value_t = 80.0, help = "PaO2 (mmHg)")]
    pub pao2: f64,

    #[arg(long, default_value_t = 7.0, help = "Organ function score (0=bad, 10=good)")]
    pub organ: f64,

    #[arg(long, default_value_t = 6.0, help = "Echo LV/RV score (0=bad, 10=good)")]
    pub echo: f64,

    #[arg(long, help = "Append the scored measurement to this patient's history")]
    pub patient: Option<String>,

    #[arg(long, help = "Write a JSON score report to this path")]
    pub json: Option<PathBuf>,

    #[arg(long, default_value = "data", help = "Directory holding the store documents")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct PatientArgs {
    #[command(subcommand)]
    pub command: PatientCommand,
}

#[derive(Debug, Subcommand)]
pub enum PatientCommand {
    /// Create a patient, or update demographics keeping the history
    Add(PatientAddArgs),
    /// List patients with their measurement counts
    List(StoreArgs),
    /// Show one patient record
    Show(PatientIdArgs),
    /// Delete a patient and its history
    Delete(PatientIdArgs),
}

#[derive(Debug, Args)]
pub struct PatientAddArgs {
    #[arg(long, help = "Patient id (e.g. ECMO-001)")]
    pub id: String,

    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value_t = 60)]
    pub age: u32,

    #[arg(long, default_value = "VA-ECMO", help = "Diagnosis / comment")]
    pub diagnosis: String,

    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct PatientIdArgs {
    #[arg(long)]
    pub id: String,

    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct StoreArgs {
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    #[arg(long)]
    pub patient: String,

    #[arg(long, help = "Export the history as TSV to this path")]
    pub tsv: Option<PathBuf>,

    #[arg(long, help = "Export the history as JSON to this path")]
    pub json: Option<PathBuf>,

    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct CaseArgs {
    #[command(subcommand)]
    pub command: CaseCommand,
}

#[derive(Debug, Subcommand)]
pub enum CaseCommand {
    /// Validate a study-case JSON file and insert or replace it by study id
    Upsert(CaseUpsertArgs),
    /// List recorded study cases
    List(StoreArgs),
    /// Show one study case
    Show(CaseIdArgs),
    /// Delete a study case
    Delete(CaseIdArgs),
}

#[derive(Debug, Args)]
pub struct CaseUpsertArgs {
    #[arg(long, help = "Path to a study-case JSON file")]
    pub file: PathBuf,

    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct CaseIdArgs {
    #[arg(long, help = "Study id (pseudonymized)")]
    pub id: String,

    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
}
