//! Per-request session state, read from cookies.
//!
//! Nothing here is shared between requests: each handler receives its own
//! [`Session`] and passes it to the page renderer.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

use psico_auth::User;

use crate::error::WebError;
use crate::state::AppState;

pub const THEME_COOKIE: &str = "psico_theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub theme: Theme,
    /// Logged-in user; always `None` when the login gate is disabled.
    pub user: Option<User>,
}

impl Session {
    pub fn from_headers(headers: &HeaderMap, state: &AppState) -> Self {
        let theme = cookie_value(headers, THEME_COOKIE)
            .and_then(Theme::parse)
            .unwrap_or_default();

        let user = state.auth.as_ref().and_then(|auth| {
            let token = cookie_value(headers, &auth.cookie().name)?;
            match auth.verify_token(token) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::debug!(error = %e, "ignoring invalid session cookie");
                    None
                }
            }
        });

        Self { theme, user }
    }
}

impl FromRequestParts<AppState> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Session::from_headers(&parts.headers, state))
    }
}

/// Find a cookie by name across all `Cookie` headers.
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Build a `Set-Cookie` header. `max_age` of zero deletes the cookie.
pub fn set_cookie(
    name: &str,
    value: &str,
    max_age: u64,
) -> Result<(HeaderName, HeaderValue), WebError> {
    let cookie = format!("{name}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}");
    let value = HeaderValue::from_str(&cookie)
        .map_err(|e| WebError::Internal(format!("invalid cookie {name}: {e}")))?;
    Ok((SET_COOKIE, value))
}
