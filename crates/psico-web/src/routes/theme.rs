use axum::response::{IntoResponse, Redirect, Response};

use crate::error::WebError;
use crate::session::{Session, THEME_COOKIE, set_cookie};

const THEME_MAX_AGE: u64 = 365 * 24 * 60 * 60;

pub async fn toggle_theme(session: Session) -> Result<Response, WebError> {
    let theme = session.theme.toggled();
    let header = set_cookie(THEME_COOKIE, theme.as_str(), THEME_MAX_AGE)?;
    Ok(([header], Redirect::to("/")).into_response())
}
