use thiserror::Error;

use crate::models::submission::{SubmissionEvent, SubmissionState};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown gender: {0}")]
    UnknownGender(String),

    #[error("unknown therapeutic approach: {0}")]
    UnknownApproach(String),

    #[error("invalid submission transition: {event:?} in state {from:?}")]
    InvalidTransition {
        from: SubmissionState,
        event: SubmissionEvent,
    },
}
