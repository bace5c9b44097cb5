//! Error types for the dayplan crates.

use thiserror::Error;

/// Errors that can occur in dayplan operations.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for dayplan operations.
pub type PlanResult<T> = Result<T, PlanError>;
