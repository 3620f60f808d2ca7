use jsonwebtoken::{DecodingKey, EncodingKey};
use tracing::{info, warn};

use crate::config::{AuthConfig, CookieSettings};
use crate::error::AuthError;
use crate::session::{self, SessionClaims};

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub name: String,
    pub email: Option<String>,
}

/// Result of one login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(User),
    /// Unknown user or wrong password.
    IncorrectCredentials,
    /// Username or password left empty.
    MissingCredentials,
}

/// Checks credentials against the auth document and issues session tokens.
pub struct Authenticator {
    config: AuthConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Authenticator {
    pub fn new(config: AuthConfig) -> Self {
        let secret = config.cookie.key.as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            config,
        }
    }

    pub fn cookie(&self) -> &CookieSettings {
        &self.config.cookie
    }

    pub fn login(&self, username: &str, password: &str) -> LoginOutcome {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return LoginOutcome::MissingCredentials;
        }

        let Some(record) = self.config.credentials.usernames.get(username) else {
            info!(username, "login rejected: unknown user");
            return LoginOutcome::IncorrectCredentials;
        };

        match bcrypt::verify(password, &record.password) {
            Ok(true) => {
                info!(username, "login succeeded");
                LoginOutcome::Authenticated(User {
                    username: username.to_string(),
                    name: record.name.clone(),
                    email: record.email.clone(),
                })
            }
            Ok(false) => {
                info!(username, "login rejected: wrong password");
                LoginOutcome::IncorrectCredentials
            }
            Err(e) => {
                warn!(username, error = %e, "stored password hash is unusable");
                LoginOutcome::IncorrectCredentials
            }
        }
    }

    /// Issue a signed session token valid for the configured number of days.
    pub fn issue_token(&self, user: &User) -> Result<String, AuthError> {
        let claims = SessionClaims::new(
            &user.username,
            &user.name,
            session::now_seconds(),
            self.config.cookie.expiry_days,
        );
        session::sign(&claims, &self.encoding_key)
    }

    /// Resolve a session token back into a user still present in the
    /// credentials document.
    pub fn verify_token(&self, token: &str) -> Result<User, AuthError> {
        let claims = session::verify(token, &self.decoding_key)?;
        let record = self
            .config
            .credentials
            .usernames
            .get(&claims.sub)
            .ok_or_else(|| AuthError::UserNotFound(claims.sub.clone()))?;

        Ok(User {
            username: claims.sub,
            name: record.name.clone(),
            email: record.email.clone(),
        })
    }
}

/// Hash a plaintext password for the credentials document.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    Ok(bcrypt::hash(password, bcrypt::DEFAULT_COST)?)
}
