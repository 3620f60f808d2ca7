use std::sync::Arc;

use psico_auth::Authenticator;
use psico_model::ReportModel;
use psico_prompt::PromptBuilder;

use crate::error::WebError;
use crate::pages::Pages;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Everything here is immutable after startup; per-user state lives in
/// [`crate::session::Session`].
#[derive(Clone)]
pub struct AppState {
    pub prompts: Arc<PromptBuilder>,
    pub model: Arc<dyn ReportModel>,
    /// Present when the login gate is enabled.
    pub auth: Option<Arc<Authenticator>>,
    pub pages: Arc<Pages>,
}

impl AppState {
    pub fn new(
        model: Arc<dyn ReportModel>,
        auth: Option<Authenticator>,
    ) -> Result<Self, WebError> {
        Ok(Self {
            prompts: Arc::new(PromptBuilder::new()?),
            model,
            auth: auth.map(Arc::new),
            pages: Arc::new(Pages::new()?),
        })
    }

    pub fn auth_enabled(&self) -> bool {
        self.auth.is_some()
    }
}
