use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::bedrock::BedrockModel;
use crate::config::{DEFAULT_GEMINI_BASE_URL, ModelConfig};
use crate::error::ModelError;
use crate::gemini::GeminiModel;

/// A generative-text service that turns one prompt into one report.
///
/// Implementations make a single outbound request per call: no retry,
/// no backoff, no timeout.
#[async_trait]
pub trait ReportModel: Send + Sync {
    /// Model identifier, recorded on each generated report.
    fn model_id(&self) -> &str;

    /// Send `prompt` and return the generated text verbatim.
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}

/// Build the client described by `config`.
///
/// Fails with [`ModelError::Config`] when the credentials or model id are
/// unusable; no request is sent to the provider.
pub async fn connect(config: &ModelConfig) -> Result<Arc<dyn ReportModel>, ModelError> {
    config.validate()?;

    let model: Arc<dyn ReportModel> = match config {
        ModelConfig::Bedrock {
            region,
            model_id,
            credentials,
        } => Arc::new(BedrockModel::new(region, model_id, credentials).await),
        ModelConfig::Gemini {
            api_key,
            model,
            base_url,
        } => Arc::new(GeminiModel::with_base_url(
            api_key,
            model,
            base_url.as_deref().unwrap_or(DEFAULT_GEMINI_BASE_URL),
        )?),
    };

    info!(
        provider = config.provider(),
        model = model.model_id(),
        credentials = %config.credential_hint(),
        "model client initialized"
    );

    Ok(model)
}
