//! psico-prompt
//!
//! Builds the single text prompt sent to the model from a validated
//! intake record.

pub mod error;
pub mod instruction;
pub mod render;

pub use instruction::diagnosis_instruction;
pub use render::PromptBuilder;
