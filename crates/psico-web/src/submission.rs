//! One pass through validate → build prompt → generate.
//!
//! Every failure ends here as an [`Outcome`]; nothing propagates to the
//! handler. Logs carry the submission id, never patient data.

use tracing::{error, info, warn};
use uuid::Uuid;

use psico_core::models::intake::IntakeForm;
use psico_core::models::report::GeneratedReport;
use psico_core::models::submission::{SubmissionEvent, SubmissionState};
use psico_core::validation::ValidationError;
use psico_model::ReportModel;
use psico_prompt::PromptBuilder;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Required fields missing; the model was not called.
    Rejected(ValidationError),
    Succeeded(GeneratedReport),
    /// User-facing failure message.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct Submission {
    pub id: Uuid,
    pub state: SubmissionState,
    pub outcome: Outcome,
}

struct Tracker {
    id: Uuid,
    state: SubmissionState,
}

impl Tracker {
    fn advance(&mut self, event: SubmissionEvent) {
        match self.state.advance(event) {
            Ok(next) => {
                tracing::debug!(submission_id = %self.id, from = ?self.state, to = ?next, "submission transition");
                self.state = next;
            }
            Err(e) => {
                error!(submission_id = %self.id, error = %e, "submission state machine violated");
                self.state = SubmissionState::Failed;
            }
        }
    }

    fn finish(self, outcome: Outcome) -> Submission {
        Submission {
            id: self.id,
            state: self.state,
            outcome,
        }
    }
}

pub fn failure_message(cause: &dyn std::fmt::Display) -> String {
    format!("An error occurred while generating the report: {cause}")
}

pub async fn submit(
    prompts: &PromptBuilder,
    model: &dyn ReportModel,
    form: &IntakeForm,
) -> Submission {
    let mut tracker = Tracker {
        id: Uuid::new_v4(),
        state: SubmissionState::Idle,
    };
    info!(submission_id = %tracker.id, "report requested");
    tracker.advance(SubmissionEvent::Submit);

    let record = match form.validate() {
        Ok(record) => record,
        Err(e) => {
            warn!(submission_id = %tracker.id, missing = ?e.missing, invalid = e.invalid.len(), "submission rejected");
            tracker.advance(SubmissionEvent::ValidationFailed);
            return tracker.finish(Outcome::Rejected(e));
        }
    };
    tracker.advance(SubmissionEvent::ValidationPassed);

    let prompt = match prompts.build(&record) {
        Ok(prompt) => prompt,
        Err(e) => {
            error!(submission_id = %tracker.id, error = %e, "prompt rendering failed");
            tracker.advance(SubmissionEvent::ModelFailed);
            return tracker.finish(Outcome::Failed(failure_message(&e)));
        }
    };
    info!(submission_id = %tracker.id, chars = prompt.len(), model = model.model_id(), "invoking model");

    match model.generate(&prompt).await {
        Ok(text) => {
            info!(submission_id = %tracker.id, chars = text.len(), "report generated");
            tracker.advance(SubmissionEvent::ModelReplied);
            tracker.finish(Outcome::Succeeded(GeneratedReport::new(text, model.model_id())))
        }
        Err(e) => {
            error!(submission_id = %tracker.id, error = %e, "report generation failed");
            tracker.advance(SubmissionEvent::ModelFailed);
            tracker.finish(Outcome::Failed(failure_message(&e)))
        }
    }
}
