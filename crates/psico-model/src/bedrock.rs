//! Amazon Bedrock backend using the Converse API.
//!
//! The prompt is sent as a single user message with no system prompt; the
//! persona and instructions already live in the prompt text.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::config::Credentials;
use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, Message};
use tracing::info;

use crate::client::ReportModel;
use crate::config::CredentialSource;
use crate::error::{ModelError, format_err_chain};

pub struct BedrockModel {
    client: Client,
    model_id: String,
}

impl BedrockModel {
    /// Build a client with explicitly supplied credentials.
    pub async fn new(region: &str, model_id: &str, credentials: &CredentialSource) -> Self {
        let config = build_aws_config(region, credentials).await;
        Self::from_client(Client::new(&config), model_id)
    }

    pub fn from_client(client: Client, model_id: &str) -> Self {
        Self {
            client,
            model_id: model_id.to_string(),
        }
    }
}

/// Build an `SdkConfig` from a region and credential source.
pub async fn build_aws_config(
    region: &str,
    credentials: &CredentialSource,
) -> aws_config::SdkConfig {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()));

    match credentials {
        CredentialSource::Inline {
            access_key_id,
            secret_access_key,
            session_token,
        } => {
            builder = builder.credentials_provider(Credentials::new(
                access_key_id,
                secret_access_key,
                session_token.clone(),
                None,
                "psico-config",
            ));
        }
        CredentialSource::Profile { profile_name } => {
            builder = builder.profile_name(profile_name);
        }
        CredentialSource::DefaultChain => {}
    }

    builder.load().await
}

#[async_trait]
impl ReportModel for BedrockModel {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(prompt.to_string()))
            .build()
            .map_err(|e| ModelError::Invocation(e.to_string()))?;

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .messages(message)
            .send()
            .await
            .map_err(|e| ModelError::Invocation(format_err_chain(&e)))?;

        if let Some(usage) = response.usage() {
            info!(
                model = %self.model_id,
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "bedrock converse complete"
            );
        }

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| ModelError::ResponseParse("no message in response".to_string()))?;

        let text = output_message
            .content()
            .iter()
            .filter_map(|block| {
                if let ContentBlock::Text(text) = block {
                    Some(text.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(ModelError::EmptyResponse);
        }

        Ok(text)
    }
}
