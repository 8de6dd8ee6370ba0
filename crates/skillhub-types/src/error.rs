use std::fmt;

use thiserror::Error;

/// Coarse classification of a failed catalog operation.
///
/// This is what the boundary layers (HTTP, CLI) switch on; the message carried
/// by [`SkillError`] is passed through to the caller unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillErrorKind {
    NotFound,
    Conflict,
    InvalidInput,
    StorageFailure,
}

impl fmt::Display for SkillErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillErrorKind::NotFound => write!(f, "not_found"),
            SkillErrorKind::Conflict => write!(f, "conflict"),
            SkillErrorKind::InvalidInput => write!(f, "invalid_input"),
            SkillErrorKind::StorageFailure => write!(f, "storage_failure"),
        }
    }
}

/// Errors related to skill operations.
#[derive(Debug, Error)]
pub enum SkillError {
    #[error("skill '{0}' not found")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("storage error: {0}")]
    StorageFailure(String),
}

impl SkillError {
    pub fn kind(&self) -> SkillErrorKind {
        match self {
            SkillError::NotFound(_) => SkillErrorKind::NotFound,
            SkillError::Conflict(_) => SkillErrorKind::Conflict,
            SkillError::InvalidInput(_) => SkillErrorKind::InvalidInput,
            SkillError::StorageFailure(_) => SkillErrorKind::StorageFailure,
        }
    }
}

/// Errors from repository operations (used by trait definitions in skillhub-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error: {0}")]
    Connection(String),

    #[error("query error: {0}")]
    Query(String),

    /// A stored value could not be turned back into its domain shape.
    #[error("decode error: {0}")]
    Decode(String),

    #[error("conflict: {0}")]
    Conflict(String),
}

impl From<RepositoryError> for SkillError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::Conflict(msg) => SkillError::Conflict(msg),
            other => SkillError::StorageFailure(other.to_string()),
        }
    }
}
