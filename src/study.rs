//! Pseudonymized 30CERW study-case records.
//!
//! Every dropdown of the original data-collection sheet is a closed enum
//! with an explicit `Unset` variant, so "not filled in" survives the serde
//! boundary as a value instead of a magic string. Unknown strings are
//! rejected during deserialization, before any record reaches a store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const STUDY_DOC: &str = "study_30cerw_cases.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YesNo {
    #[default]
    Unset,
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    #[default]
    Unset,
    Female,
    Male,
    Diverse,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CprDuration {
    #[default]
    Unset,
    Under30Min,
    Over30Min,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VentilationDuration {
    #[default]
    Unset,
    Under7Days,
    Over7Days,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MainDiagnosis {
    #[default]
    Unset,
    CardiogenicShock,
    PostcardiotomyShock,
    MixedShock,
}

impl MainDiagnosis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::CardiogenicShock => "cardiogenic_shock",
            Self::PostcardiotomyShock => "postcardiotomy_shock",
            Self::MixedShock => "mixed_shock",
        }
    }
}

impl std::fmt::Display for MainDiagnosis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShockCause {
    #[default]
    Unset,
    AcuteMyocardialInfarction,
    DilatedCardiomyopathy,
    AcuteHeartFailure,
    Myocarditis,
    PostSurgery,
    Other,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Comorbidities {
    #[serde(default)]
    pub copd: YesNo,
    #[serde(default)]
    pub chronic_kidney_disease: YesNo,
    #[serde(default)]
    pub coronary_artery_disease: YesNo,
    #[serde(default)]
    pub cardiomyopathy: YesNo,
    #[serde(default)]
    pub liver_disease: YesNo,
    #[serde(default)]
    pub diabetes: YesNo,
    #[serde(default)]
    pub cerebrovascular_disease: YesNo,
    #[serde(default)]
    pub other: String,
}

/// Pre-implant laboratory block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Labs {
    pub ph: f64,
    pub lactate: f64,
    pub base_excess: f64,
    pub creatinine: f64,
    pub bilirubin: f64,
    pub pao2: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circulation {
    pub map_mmhg: f64,
    #[serde(default)]
    pub vasopressor_required: YesNo,
    pub norepinephrine_equivalent: f64,
    #[serde(default)]
    pub mechanical_ventilation_current: YesNo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoints {
    #[serde(default)]
    pub survival_30d: YesNo,
    #[serde(default)]
    pub weaning_success: YesNo,
    pub explantation_date: Option<NaiveDate>,
    #[serde(default)]
    pub weaning_definition: String,
}

/// One pseudonymized study case. The study id doubles as the store key;
/// no clear names or direct identifiers belong in here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyCase {
    pub study_id: String,
    pub center: String,
    pub implantation_date: NaiveDate,
    #[serde(default)]
    pub sex: Sex,
    pub age: u32,
    pub height_cm: u32,
    pub weight_kg: f64,
    pub bmi: f64,
    #[serde(default)]
    pub cpr_before_ecmo: YesNo,
    #[serde(default)]
    pub cpr_duration: CprDuration,
    #[serde(default)]
    pub ecpr: YesNo,
    #[serde(default)]
    pub mechanical_ventilation_pre: YesNo,
    #[serde(default)]
    pub ventilation_duration: VentilationDuration,
    pub icu_days_pre: u32,
    #[serde(default)]
    pub main_diagnosis: MainDiagnosis,
    #[serde(default)]
    pub cause: ShockCause,
    #[serde(default)]
    pub other_cause: String,
    #[serde(default)]
    pub comorbidities: Comorbidities,
    pub labs: Labs,
    pub circulation: Circulation,
    pub endpoints: Endpoints,
}

impl StudyCase {
    /// The store key. Empty ids are rejected at the CLI boundary.
    pub fn key(&self) -> &str {
        self.study_id.trim()
    }
}
