use serde::Serialize;
use tera::{Context, Tera};

use psico_core::models::intake::IntakeRecord;

use crate::error::PromptError;
use crate::instruction::diagnosis_instruction;

const TEMPLATE_NAME: &str = "prompt.txt";
const TEMPLATE: &str = include_str!("prompt.txt");

/// Substituted for optional fields the clinician left empty.
pub const NOT_PROVIDED: &str = "Not provided";

/// The named values substituted into the template.
#[derive(Debug, Serialize)]
struct PromptFields<'a> {
    name: &'a str,
    age: u8,
    gender: &'a str,
    consult_reason: &'a str,
    prior_diagnosis: &'a str,
    diagnosis_details: &'a str,
    medical_history: &'a str,
    main_symptoms: &'a str,
    symptom_duration: &'a str,
    stress_factors: &'a str,
    family_mental_health_history: &'a str,
    current_medications: &'a str,
    preferred_approach: &'a str,
    diagnosis_instruction: &'a str,
}

impl<'a> PromptFields<'a> {
    fn new(record: &'a IntakeRecord, instruction: &'a str) -> Self {
        Self {
            name: &record.name,
            age: record.age,
            gender: record.gender.label(),
            consult_reason: &record.consult_reason,
            prior_diagnosis: if record.has_prior_diagnosis { "Yes" } else { "No" },
            diagnosis_details: or_placeholder(&record.diagnosis_details),
            medical_history: or_placeholder(&record.medical_history),
            main_symptoms: &record.main_symptoms,
            symptom_duration: or_placeholder(&record.symptom_duration),
            stress_factors: or_placeholder(&record.stress_factors),
            family_mental_health_history: or_placeholder(&record.family_mental_health_history),
            current_medications: or_placeholder(&record.current_medications),
            preferred_approach: record.preferred_approach.label(),
            diagnosis_instruction: instruction,
        }
    }
}

fn or_placeholder(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_PROVIDED)
}

/// Renders intake records into the fixed report prompt.
///
/// The template is parsed once; rendering is pure, so the same record and
/// instruction always yield the same text.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    tera: Tera,
}

impl PromptBuilder {
    pub fn new() -> Result<Self, PromptError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)
            .map_err(|e| PromptError::TemplateParse(e.to_string()))?;
        Ok(Self { tera })
    }

    /// Build the prompt, choosing the diagnosis instruction from the record.
    pub fn build(&self, record: &IntakeRecord) -> Result<String, PromptError> {
        self.build_with_instruction(record, diagnosis_instruction(record.has_prior_diagnosis))
    }

    /// Build the prompt with an explicitly supplied diagnosis instruction.
    pub fn build_with_instruction(
        &self,
        record: &IntakeRecord,
        instruction: &str,
    ) -> Result<String, PromptError> {
        let fields = PromptFields::new(record, instruction);
        let context = Context::from_serialize(&fields)
            .map_err(|e| PromptError::TemplateRender(e.to_string()))?;

        let prompt = self.tera.render(TEMPLATE_NAME, &context)?;
        tracing::debug!(chars = prompt.len(), "prompt rendered");
        Ok(prompt)
    }
}
