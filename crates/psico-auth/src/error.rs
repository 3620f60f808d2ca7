use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("failed to read auth file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid auth document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("auth configuration error: {0}")]
    Config(String),

    #[error("token expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}
