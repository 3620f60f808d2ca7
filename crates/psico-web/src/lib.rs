//! psico-web
//!
//! The intake form served over HTTP: session handling, page rendering and
//! the submission flow. `main.rs` wires configuration and the model client
//! into [`build_router`].

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};

pub mod config;
pub mod error;
pub mod markdown;
pub mod middleware;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;
pub mod submission;

use state::AppState;

pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/report", post(routes::form::generate_report))
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_login,
        ));

    Router::new()
        .route("/", get(routes::form::index))
        .route("/login", post(routes::auth::login))
        .route("/logout", post(routes::auth::logout))
        .route("/theme", post(routes::theme::toggle_theme))
        .route("/health", get(routes::health::health_check))
        .merge(protected)
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .with_state(state)
}
