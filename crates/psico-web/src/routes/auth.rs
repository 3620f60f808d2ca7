use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

use psico_auth::LoginOutcome;

use crate::error::WebError;
use crate::pages::Notice;
use crate::session::{Session, set_cookie};
use crate::state::AppState;

pub const LOGIN_PROMPT: &str = "Please enter your username and password.";
pub const INCORRECT_CREDENTIALS: &str = "Username or password is incorrect.";

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, WebError> {
    let Some(auth) = state.auth.as_ref() else {
        return Ok(Redirect::to("/").into_response());
    };

    match auth.login(&form.username, &form.password) {
        LoginOutcome::Authenticated(user) => {
            let token = auth.issue_token(&user)?;
            let cookie = auth.cookie();
            let header = set_cookie(
                &cookie.name,
                &token,
                u64::from(cookie.expiry_days) * SECONDS_PER_DAY,
            )?;
            Ok(([header], Redirect::to("/")).into_response())
        }
        LoginOutcome::IncorrectCredentials => {
            let notice = Notice::Error(INCORRECT_CREDENTIALS.to_string());
            let page = state.pages.login(&session, &form.username, Some(&notice))?;
            Ok((StatusCode::UNAUTHORIZED, page).into_response())
        }
        LoginOutcome::MissingCredentials => {
            let notice = Notice::Warning(LOGIN_PROMPT.to_string());
            let page = state.pages.login(&session, &form.username, Some(&notice))?;
            Ok(page.into_response())
        }
    }
}

pub async fn logout(State(state): State<AppState>, session: Session) -> Result<Response, WebError> {
    let Some(auth) = state.auth.as_ref() else {
        return Ok(Redirect::to("/").into_response());
    };

    if let Some(user) = &session.user {
        tracing::info!(username = %user.username, "logout");
    }
    let header = set_cookie(&auth.cookie().name, "", 0)?;
    Ok(([header], Redirect::to("/")).into_response())
}
