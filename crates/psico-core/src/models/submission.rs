use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle of one form submission.
///
/// `Idle → Validating → {Rejected | Generating → {Succeeded | Failed}}`.
/// A new submission always starts again at `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Rejected,
    Generating,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionEvent {
    Submit,
    ValidationFailed,
    ValidationPassed,
    ModelReplied,
    ModelFailed,
}

impl SubmissionState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SubmissionState::Rejected | SubmissionState::Succeeded | SubmissionState::Failed
        )
    }

    pub fn advance(self, event: SubmissionEvent) -> Result<SubmissionState, CoreError> {
        use SubmissionEvent as E;
        use SubmissionState as S;

        match (self, event) {
            (S::Idle, E::Submit) => Ok(S::Validating),
            (S::Validating, E::ValidationFailed) => Ok(S::Rejected),
            (S::Validating, E::ValidationPassed) => Ok(S::Generating),
            (S::Generating, E::ModelReplied) => Ok(S::Succeeded),
            (S::Generating, E::ModelFailed) => Ok(S::Failed),
            (from, event) => Err(CoreError::InvalidTransition { from, event }),
        }
    }
}
