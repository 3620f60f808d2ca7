use serde::{Deserialize, Serialize};

/// Free-text report returned by the model for one intake record.
///
/// Held in memory for display only; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedReport {
    pub text: String,
    pub model_id: String,
    pub generated_at: jiff::Timestamp,
}

impl GeneratedReport {
    pub fn new(text: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model_id: model_id.into(),
            generated_at: jiff::Timestamp::now(),
        }
    }
}
