use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

/// Error type for all route handlers.
///
/// User-facing outcomes (validation warnings, generation failures, login
/// errors) are rendered as pages by the handlers themselves; only failures
/// of the web layer end up here.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("internal error: {0}")]
    Internal(String),
}

const INTERNAL_ERROR_PAGE: &str = "<!DOCTYPE html><html><head><title>Psico-IA</title></head>\
<body><h1>Something went wrong</h1><p>The page could not be displayed. Please try again.</p>\
<p><a href=\"/\">Back to the form</a></p></body></html>";

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(INTERNAL_ERROR_PAGE)).into_response()
            }
        }
    }
}

impl From<tera::Error> for WebError {
    fn from(e: tera::Error) -> Self {
        WebError::Internal(format!("template error: {e:?}"))
    }
}

impl From<psico_auth::AuthError> for WebError {
    fn from(e: psico_auth::AuthError) -> Self {
        WebError::Internal(e.to_string())
    }
}

impl From<psico_prompt::error::PromptError> for WebError {
    fn from(e: psico_prompt::error::PromptError) -> Self {
        WebError::Internal(e.to_string())
    }
}
