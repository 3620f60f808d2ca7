use serde::{Deserialize, Serialize};

use crate::error::ModelError;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Which provider to call, and with what credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "snake_case")]
pub enum ModelConfig {
    Bedrock {
        region: String,
        model_id: String,
        #[serde(default)]
        credentials: CredentialSource,
    },
    Gemini {
        api_key: String,
        #[serde(default = "default_gemini_model")]
        model: String,
        /// Override for the REST endpoint; only useful against a proxy.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        base_url: Option<String>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialSource {
    Inline {
        access_key_id: String,
        secret_access_key: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        session_token: Option<String>,
    },
    Profile {
        profile_name: String,
    },
    #[default]
    DefaultChain,
}

fn default_gemini_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

impl ModelConfig {
    pub fn provider(&self) -> &'static str {
        match self {
            ModelConfig::Bedrock { .. } => "bedrock",
            ModelConfig::Gemini { .. } => "gemini",
        }
    }

    pub fn model_id(&self) -> &str {
        match self {
            ModelConfig::Bedrock { model_id, .. } => model_id,
            ModelConfig::Gemini { model, .. } => model,
        }
    }

    /// Reject configurations that can never produce a working client.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.model_id().trim().is_empty() {
            return Err(ModelError::Config("model id is empty".to_string()));
        }

        match self {
            ModelConfig::Gemini { api_key, .. } if api_key.trim().is_empty() => {
                Err(ModelError::Config("Gemini API key is empty".to_string()))
            }
            ModelConfig::Bedrock { region, .. } if region.trim().is_empty() => {
                Err(ModelError::Config("AWS region is empty".to_string()))
            }
            ModelConfig::Bedrock {
                credentials:
                    CredentialSource::Inline {
                        access_key_id,
                        secret_access_key,
                        ..
                    },
                ..
            } if access_key_id.is_empty() || secret_access_key.is_empty() => Err(
                ModelError::Config("inline AWS credentials are incomplete".to_string()),
            ),
            _ => Ok(()),
        }
    }

    /// Credential hint safe to write to logs.
    pub fn credential_hint(&self) -> String {
        match self {
            ModelConfig::Gemini { api_key, .. } => format!("api_key={}", redact_key(api_key)),
            ModelConfig::Bedrock { credentials, .. } => match credentials {
                CredentialSource::Inline { access_key_id, .. } => {
                    format!("inline={}", redact_key(access_key_id))
                }
                CredentialSource::Profile { profile_name } => format!("profile={profile_name}"),
                CredentialSource::DefaultChain => "default_chain".to_string(),
            },
        }
    }
}

fn redact_key(key: &str) -> String {
    if key.len() <= 8 || !key.is_ascii() {
        return "****".to_string();
    }
    let prefix = &key[..4];
    let suffix = &key[key.len() - 4..];
    format!("{prefix}...{suffix}")
}
