use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Claims carried by the session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Username (key in the credentials document).
    pub sub: String,
    /// Display name shown in the greeting.
    pub name: String,
    pub iat: u64,
    pub exp: u64,
}

impl SessionClaims {
    pub fn new(username: &str, name: &str, issued_at: u64, expiry_days: u32) -> Self {
        Self {
            sub: username.to_string(),
            name: name.to_string(),
            iat: issued_at,
            exp: issued_at + u64::from(expiry_days) * SECONDS_PER_DAY,
        }
    }
}

/// Sign `claims` with the cookie key (HS256).
pub fn sign(claims: &SessionClaims, key: &EncodingKey) -> Result<String, AuthError> {
    Ok(encode(&Header::new(Algorithm::HS256), claims, key)?)
}

/// Verify a session token's signature and expiry.
pub fn verify(token: &str, key: &DecodingKey) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let token_data = decode::<SessionClaims>(token, key, &validation).map_err(|e| {
        match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken(e.to_string()),
        }
    })?;

    Ok(token_data.claims)
}

pub fn now_seconds() -> u64 {
    jiff::Timestamp::now().as_second().max(0) as u64
}
