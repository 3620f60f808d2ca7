use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// The authentication document.
///
/// ```yaml
/// credentials:
///   usernames:
///     jsmith:
///       name: John Smith
///       email: jsmith@example.com
///       password: $2b$12$...
/// cookie:
///   name: psico_auth
///   key: some-signing-key
///   expiry_days: 30
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub credentials: Credentials,
    pub cookie: CookieSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub usernames: BTreeMap<String, UserRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// bcrypt hash of the password.
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookieSettings {
    pub name: String,
    /// Secret used to sign session tokens.
    pub key: String,
    pub expiry_days: u32,
}

impl AuthConfig {
    pub fn load(path: &Path) -> Result<Self, AuthError> {
        let contents = std::fs::read_to_string(path).map_err(|source| AuthError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_yaml_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            users = config.credentials.usernames.len(),
            "auth document loaded"
        );
        Ok(config)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, AuthError> {
        let config: AuthConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AuthError> {
        if self.cookie.name.trim().is_empty() {
            return Err(AuthError::Config("cookie name is empty".to_string()));
        }
        if self.cookie.key.is_empty() {
            return Err(AuthError::Config("cookie key is empty".to_string()));
        }
        if self.cookie.expiry_days == 0 {
            return Err(AuthError::Config(
                "cookie expiry_days must be at least 1".to_string(),
            ));
        }
        if self.credentials.usernames.is_empty() {
            return Err(AuthError::Config("no users defined".to_string()));
        }
        for (username, user) in &self.credentials.usernames {
            if !user.password.starts_with("$2") {
                return Err(AuthError::Config(format!(
                    "password for {username} is not a bcrypt hash"
                )));
            }
        }
        Ok(())
    }
}
