//! Domain Errors
//!
//! Error types for domain operations. Every failure is local to the action
//! that triggered it; none of these are fatal to the process.

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    /// Generation is disabled because no provider credential was configured
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// Provider answered with a non-success status
    #[error("Provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(String),

    /// Provider answered 200 but the payload did not have the expected shape
    #[error("Story generation failed: {0}")]
    ResponseShape(String),

    #[error("Narration failed: {0}")]
    Narration(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: Uuid) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    /// Whether the error came from talking to an external provider
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Provider { .. } | Self::Transport(_) | Self::ResponseShape(_) | Self::Narration(_)
        )
    }
}
