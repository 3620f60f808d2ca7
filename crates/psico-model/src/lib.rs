//! psico-model
//!
//! Text-in/text-out report generation against an external model provider.
//! Callers depend on the [`ReportModel`] trait; [`connect`] picks the
//! backend named in the configuration.

pub mod bedrock;
pub mod client;
pub mod config;
pub mod error;
pub mod gemini;

pub use client::{ReportModel, connect};
pub use config::{CredentialSource, ModelConfig};
pub use error::ModelError;
