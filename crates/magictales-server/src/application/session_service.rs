//! Session Application Service (Use Case)
//!
//! Loads and stores sessions and applies the small state changes that do
//! not need a provider (premium toggle, saving to the library).

use std::sync::Arc;
use uuid::Uuid;

use magictales::{DomainError, Session, SessionRepository};

/// Application service for Session operations
pub struct SessionService<R: SessionRepository> {
    repo: Arc<R>,
}

impl<R: SessionRepository> SessionService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Create a fresh session
    pub async fn create(&self) -> Result<Session, DomainError> {
        let session = self.repo.save(&Session::new()).await?;
        tracing::info!("Created session {}", session.id);
        Ok(session)
    }

    /// Get a session or fail with NotFound
    pub async fn get(&self, id: Uuid) -> Result<Session, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Session", id))
    }

    /// Store a session returned by a controller function
    pub async fn store(&self, session: Session) -> Result<Session, DomainError> {
        self.repo.save(&session).await
    }

    /// Store a freshly generated story onto the latest copy of its session.
    ///
    /// Generation can take minutes; premium toggles and library saves made
    /// meanwhile are kept, only `current` is replaced.
    pub async fn store_generated(&self, generated: Session) -> Result<Session, DomainError> {
        let session = match self.repo.find_by_id(generated.id).await? {
            Some(latest) => Session {
                current: generated.current,
                ..latest
            },
            None => generated,
        };
        self.store(session).await
    }

    pub async fn set_premium(&self, id: Uuid, premium: bool) -> Result<Session, DomainError> {
        let session = self.get(id).await?.with_premium(premium);
        tracing::info!("Session {} premium -> {}", id, premium);
        self.store(session).await
    }

    /// Save the current story's title. Returns the session and whether it was new.
    pub async fn save_to_library(&self, id: Uuid) -> Result<(Session, bool), DomainError> {
        let (session, added) = self.get(id).await?.save_current_to_library()?;
        let session = self.store(session).await?;
        if added {
            tracing::info!("Session {} saved story to library ({} entries)", id, session.library.len());
        }
        Ok((session, added))
    }

    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repo.count().await
    }
}
