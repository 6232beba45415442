// ============================================================================
// Domain Models Module
// Configuration and job value objects
// ============================================================================

pub mod config;
pub mod job;

pub use config::MultiplierConfig;
pub use job::{JobId, JobOutcome, MultiplicationJob};
