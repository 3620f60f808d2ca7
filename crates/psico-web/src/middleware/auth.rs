use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::pages::Notice;
use crate::routes::auth::LOGIN_PROMPT;
use crate::session::Session;
use crate::state::AppState;

/// Login gate for protected routes.
///
/// A no-op when no auth document is configured. Otherwise requests without
/// a valid session cookie get the login page instead of the handler.
pub async fn require_login(
    State(state): State<AppState>,
    session: Session,
    req: Request,
    next: Next,
) -> Response {
    if !state.auth_enabled() || session.user.is_some() {
        return next.run(req).await;
    }

    tracing::warn!(path = %req.uri().path(), "unauthenticated request refused");
    let notice = Notice::Warning(LOGIN_PROMPT.to_string());
    match state.pages.login(&session, "", Some(&notice)) {
        Ok(page) => (StatusCode::UNAUTHORIZED, page).into_response(),
        Err(e) => e.into_response(),
    }
}
