//! Error types for port operations.

use std::path::PathBuf;

use loadout_domain::{DomainError, RecordError};

/// Failure to load a catalog or build from its source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Source document does not exist.
    #[error("Source document not found: {0}")]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Document parsed but holds a value the domain rejects.
    #[error("Invalid {document} document: {message}")]
    Invalid {
        document: &'static str,
        message: String,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Record(#[from] RecordError),
}

impl SourceError {
    /// Create an Invalid error for the named document kind.
    pub fn invalid(document: &'static str, message: impl ToString) -> Self {
        Self::Invalid {
            document,
            message: message.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
