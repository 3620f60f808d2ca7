pub mod intake;
pub mod report;
pub mod submission;
