use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Gender options offered by the intake form, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Male,
    Female,
    NonBinary,
    Unspecified,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::NonBinary,
        Gender::Unspecified,
    ];

    /// Stable value used in form submissions.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::NonBinary => "non_binary",
            Gender::Unspecified => "unspecified",
        }
    }

    /// Human-readable label, as shown in the form and the prompt.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NonBinary => "Non-binary",
            Gender::Unspecified => "Prefer not to specify",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| CoreError::UnknownGender(s.to_string()))
    }
}

/// Therapeutic approach the clinician prefers, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TherapeuticApproach {
    #[default]
    Cbt,
    Psychoanalysis,
    Humanistic,
    Systemic,
    Integrative,
    Aba,
}

impl TherapeuticApproach {
    pub const ALL: [TherapeuticApproach; 6] = [
        TherapeuticApproach::Cbt,
        TherapeuticApproach::Psychoanalysis,
        TherapeuticApproach::Humanistic,
        TherapeuticApproach::Systemic,
        TherapeuticApproach::Integrative,
        TherapeuticApproach::Aba,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TherapeuticApproach::Cbt => "cbt",
            TherapeuticApproach::Psychoanalysis => "psychoanalysis",
            TherapeuticApproach::Humanistic => "humanistic",
            TherapeuticApproach::Systemic => "systemic",
            TherapeuticApproach::Integrative => "integrative",
            TherapeuticApproach::Aba => "aba",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TherapeuticApproach::Cbt => "Cognitive Behavioral Therapy",
            TherapeuticApproach::Psychoanalysis => "Psychoanalysis",
            TherapeuticApproach::Humanistic => "Humanistic Therapy",
            TherapeuticApproach::Systemic => "Systemic Therapy",
            TherapeuticApproach::Integrative => "Integrative Therapy",
            TherapeuticApproach::Aba => "ABA Therapy",
        }
    }
}

impl fmt::Display for TherapeuticApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TherapeuticApproach {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TherapeuticApproach::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| CoreError::UnknownApproach(s.to_string()))
    }
}

/// The structured clinical-form data for one report request.
///
/// Only ever constructed through [`IntakeForm::validate`], so the required
/// fields are known to be present. Lives for a single submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeRecord {
    // Patient
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub consult_reason: String,
    pub has_prior_diagnosis: bool,
    pub diagnosis_details: Option<String>,
    pub medical_history: Option<String>,

    // Clinical details
    pub main_symptoms: String,
    pub symptom_duration: Option<String>,
    pub stress_factors: Option<String>,
    pub family_mental_health_history: Option<String>,
    pub current_medications: Option<String>,
    pub preferred_approach: TherapeuticApproach,
}

/// Raw field values as posted by the browser.
///
/// Every field is a string so that a half-filled form can be re-rendered
/// exactly as the user left it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub consult_reason: String,
    pub has_prior_diagnosis: String,
    pub diagnosis_details: String,
    pub medical_history: String,
    pub main_symptoms: String,
    pub symptom_duration: String,
    pub stress_factors: String,
    pub family_mental_health_history: String,
    pub current_medications: String,
    pub preferred_approach: String,
}

impl IntakeForm {
    /// `has_prior_diagnosis` is posted as `"yes"` or `"no"`.
    pub fn prior_diagnosis_selected(&self) -> bool {
        self.has_prior_diagnosis == "yes"
    }
}
