/// Appended when the patient arrives with a prior diagnosis.
pub const PRIOR_DIAGNOSIS_INSTRUCTION: &str = "Since the patient has a prior diagnosis, \
include considerations about this diagnosis in the report and explain how it relates to \
the symptoms and to the proposed treatment.";

/// Appended when there is no prior diagnosis.
pub const NO_PRIOR_DIAGNOSIS_INSTRUCTION: &str = "Since the patient does not have a prior \
diagnosis, avoid speculating about possible diagnoses. Focus on describing the symptoms and \
on the treatment plan without making specific prognoses.";

/// Select the instruction telling the model how to treat diagnosis information.
pub fn diagnosis_instruction(has_prior_diagnosis: bool) -> &'static str {
    if has_prior_diagnosis {
        PRIOR_DIAGNOSIS_INSTRUCTION
    } else {
        NO_PRIOR_DIAGNOSIS_INSTRUCTION
    }
}
