use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use psico_core::models::intake::IntakeForm;

use crate::error::WebError;
use crate::pages::Notice;
use crate::routes::auth::LOGIN_PROMPT;
use crate::session::Session;
use crate::state::AppState;
use crate::submission::{Outcome, submit};

pub const REPORT_READY: &str = "Report generated successfully!";

/// Landing page: the login form while the gate is closed, otherwise an
/// empty intake form.
pub async fn index(State(state): State<AppState>, session: Session) -> Result<Response, WebError> {
    if state.auth_enabled() && session.user.is_none() {
        let notice = Notice::Warning(LOGIN_PROMPT.to_string());
        return Ok(state.pages.login(&session, "", Some(&notice))?.into_response());
    }

    let page = state.pages.form(
        &session,
        state.auth_enabled(),
        &IntakeForm::default(),
        None,
        None,
    )?;
    Ok(page.into_response())
}

/// Validate the posted form, generate a report and render the form again
/// with the outcome.
pub async fn generate_report(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<IntakeForm>,
) -> Result<(StatusCode, Html<String>), WebError> {
    let submission = submit(&state.prompts, state.model.as_ref(), &form).await;

    let (status, notice, report) = match &submission.outcome {
        Outcome::Rejected(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Notice::Warning(e.message()),
            None,
        ),
        Outcome::Succeeded(report) => (
            StatusCode::OK,
            Notice::Success(REPORT_READY.to_string()),
            Some(report),
        ),
        Outcome::Failed(message) => (StatusCode::BAD_GATEWAY, Notice::Error(message.clone()), None),
    };

    let page = state
        .pages
        .form(&session, state.auth_enabled(), &form, Some(&notice), report)?;
    Ok((status, page))
}
