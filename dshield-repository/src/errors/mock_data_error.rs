//! Fixture store error types.

use thiserror::Error;

/// Errors from fixture store operations.
///
/// Lookups by id are the only operations that can fail; everything else
/// accepts its input as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MockDataError {
    /// No EmBrain entity has the requested id.
    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    /// No Napoleon job has the requested id.
    #[error("Job not found: {0}")]
    JobNotFound(String),
}

impl MockDataError {
    /// Create an entity not found error.
    pub fn entity_not_found(id: impl Into<String>) -> Self {
        Self::EntityNotFound(id.into())
    }

    /// Create a job not found error.
    pub fn job_not_found(job_id: impl Into<String>) -> Self {
        Self::JobNotFound(job_id.into())
    }

    /// Short message suitable for an HTTP error body.
    pub fn detail(&self) -> &'static str {
        match self {
            Self::EntityNotFound(_) => "Entity not found",
            Self::JobNotFound(_) => "Job not found",
        }
    }
}
