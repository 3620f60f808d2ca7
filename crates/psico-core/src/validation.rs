//! The validation gate between the raw form and the prompt builder.
//!
//! A submission only reaches the model once [`IntakeForm::validate`] has
//! produced an [`IntakeRecord`].

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::models::intake::{Gender, IntakeForm, IntakeRecord, TherapeuticApproach};

pub const MAX_AGE: u8 = 120;

/// Fields that must be filled in before a report may be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    Name,
    Age,
    ConsultReason,
    MainSymptoms,
}

impl RequiredField {
    pub fn label(self) -> &'static str {
        match self {
            RequiredField::Name => "Patient name",
            RequiredField::Age => "Age",
            RequiredField::ConsultReason => "Reason for consultation",
            RequiredField::MainSymptoms => "Main symptoms",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Every problem found in one submitted form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("{}", self.message())]
pub struct ValidationError {
    pub missing: Vec<RequiredField>,
    pub invalid: Vec<String>,
}

impl ValidationError {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.invalid.is_empty()
    }

    /// One user-facing sentence covering all problems.
    pub fn message(&self) -> String {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            let names: Vec<&str> = self.missing.iter().map(|f| f.label()).collect();
            parts.push(format!(
                "Please fill in all required fields: {}.",
                names.join(", ")
            ));
        }
        parts.extend(self.invalid.iter().cloned());
        parts.join(" ")
    }
}

impl IntakeForm {
    /// Check the required fields and convert the raw values into a record.
    ///
    /// Whitespace-only text counts as empty. An age of `0` counts as
    /// missing. Text values that pass are kept verbatim.
    pub fn validate(&self) -> Result<IntakeRecord, ValidationError> {
        let mut errors = ValidationError::default();

        if is_blank(&self.name) {
            errors.missing.push(RequiredField::Name);
        }

        let age = match self.age.trim() {
            "" => {
                errors.missing.push(RequiredField::Age);
                0
            }
            raw => match raw.parse::<u16>() {
                Ok(0) => {
                    errors.missing.push(RequiredField::Age);
                    0
                }
                Ok(n) if n <= MAX_AGE as u16 => n as u8,
                _ => {
                    errors.invalid.push(format!(
                        "Age must be a whole number between 0 and {MAX_AGE}."
                    ));
                    0
                }
            },
        };

        if is_blank(&self.consult_reason) {
            errors.missing.push(RequiredField::ConsultReason);
        }
        if is_blank(&self.main_symptoms) {
            errors.missing.push(RequiredField::MainSymptoms);
        }

        let gender = match self.gender.trim() {
            "" => Gender::default(),
            raw => raw.parse::<Gender>().unwrap_or_else(|e| {
                errors.invalid.push(format!("{e}."));
                Gender::default()
            }),
        };

        let preferred_approach = match self.preferred_approach.trim() {
            "" => TherapeuticApproach::default(),
            raw => raw.parse::<TherapeuticApproach>().unwrap_or_else(|e| {
                errors.invalid.push(format!("{e}."));
                TherapeuticApproach::default()
            }),
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(IntakeRecord {
            name: self.name.clone(),
            age,
            gender,
            consult_reason: self.consult_reason.clone(),
            has_prior_diagnosis: self.prior_diagnosis_selected(),
            diagnosis_details: optional(&self.diagnosis_details),
            medical_history: optional(&self.medical_history),
            main_symptoms: self.main_symptoms.clone(),
            symptom_duration: optional(&self.symptom_duration),
            stress_factors: optional(&self.stress_factors),
            family_mental_health_history: optional(&self.family_mental_health_history),
            current_medications: optional(&self.current_medications),
            preferred_approach,
        })
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn optional(value: &str) -> Option<String> {
    if is_blank(value) {
        None
    } else {
        Some(value.to_string())
    }
}
