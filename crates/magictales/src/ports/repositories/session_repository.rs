//! Session Repository Port
//!
//! Abstract interface for session storage.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Session};

/// Repository interface for Session values
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Find a session by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Session>, DomainError>;

    /// Save a session (insert or replace)
    async fn save(&self, session: &Session) -> Result<Session, DomainError>;

    /// Number of live sessions
    async fn count(&self) -> Result<usize, DomainError>;
}
