//! psico-core
//!
//! Pure domain types for the intake form: the intake record, the validation
//! gate, generated reports and the submission state machine.
//! No I/O — this is the shared vocabulary of the Psico-IA system.

pub mod error;
pub mod models;
pub mod validation;
