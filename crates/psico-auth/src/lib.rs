//! psico-auth
//!
//! Optional login gate in front of the intake form: a static YAML
//! credentials document, bcrypt password checks and a signed session
//! cookie.

pub mod config;
pub mod error;
pub mod login;
pub mod session;

pub use config::AuthConfig;
pub use error::AuthError;
pub use login::{Authenticator, LoginOutcome, User};
pub use session::SessionClaims;
