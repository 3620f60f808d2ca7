use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use thiserror::Error;

use psico_model::ModelConfig;
use psico_model::config::DEFAULT_GEMINI_MODEL;

/// Key used by the original flat configuration document.
const LEGACY_API_KEY: &str = "GOOGLE_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub model: ModelConfig,
    #[serde(default)]
    pub server: ServerConfig,
    /// Path to the authentication document. When set, a login gate
    /// precedes the form. Relative paths resolve against the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8501))
}

pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut config = parse_config(&contents)?;

    if let Some(auth_file) = config.auth_file.take() {
        let resolved = match path.parent() {
            Some(dir) if auth_file.is_relative() => dir.join(auth_file),
            _ => auth_file,
        };
        config.auth_file = Some(resolved);
    }

    tracing::info!(path = %path.display(), provider = config.model.provider(), "configuration loaded");
    Ok(config)
}

/// Parse a config document, migrating older layouts first.
pub fn parse_config(contents: &str) -> Result<AppConfig, ConfigError> {
    let raw: Value = serde_yaml::from_str(contents)?;
    let migrated = migrate(raw)?;
    Ok(serde_yaml::from_value(migrated)?)
}

/// Rewrite the flat `GOOGLE_API_KEY: <key>` layout into a `model` section.
fn migrate(mut raw: Value) -> Result<Value, ConfigError> {
    let obj = raw
        .as_mapping_mut()
        .ok_or_else(|| ConfigError::Invalid("config is not a mapping".to_string()))?;

    let has_model = obj.contains_key("model");
    if let Some(api_key) = obj.remove(LEGACY_API_KEY) {
        if has_model {
            tracing::warn!("ignoring {LEGACY_API_KEY}: a model section is present");
        } else {
            let mut model = Mapping::new();
            model.insert("provider".into(), "gemini".into());
            model.insert("api_key".into(), api_key);
            model.insert("model".into(), DEFAULT_GEMINI_MODEL.into());
            obj.insert("model".into(), Value::Mapping(model));
            tracing::info!("migrated flat {LEGACY_API_KEY} config to a model section");
        }
    }

    Ok(raw)
}
