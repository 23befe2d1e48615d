//! In-memory implementation of SessionRepository
//!
//! Sessions live only as long as the process. Idle sessions expire, and the
//! map is capped: saving a new session at capacity evicts the one idle longest.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use uuid::Uuid;

use magictales::{DomainError, Session, SessionRepository};

use crate::config::{DEFAULT_MAX_SESSIONS, DEFAULT_SESSION_IDLE_TTL_SECS};

struct Entry {
    session: Session,
    touched: Instant,
}

pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<Uuid, Entry>>,
    max_sessions: usize,
    idle_ttl: Duration,
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::with_limits(
            DEFAULT_MAX_SESSIONS,
            Duration::from_secs(DEFAULT_SESSION_IDLE_TTL_SECS),
        )
    }
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(max_sessions: usize, idle_ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions: max_sessions.max(1),
            idle_ttl,
        }
    }

    fn is_expired(&self, entry: &Entry, now: Instant) -> bool {
        now.duration_since(entry.touched) >= self.idle_ttl
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Session>, DomainError> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        match sessions.get_mut(&id) {
            Some(entry) if self.is_expired(entry, now) => {
                sessions.remove(&id);
                Ok(None)
            }
            Some(entry) => {
                entry.touched = now;
                Ok(Some(entry.session.clone()))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, session: &Session) -> Result<Session, DomainError> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, entry| !self.is_expired(entry, now));
        let expired = before - sessions.len();

        let mut evicted = None;
        if !sessions.contains_key(&session.id) && sessions.len() >= self.max_sessions {
            evicted = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.touched)
                .map(|(id, _)| *id);
            if let Some(id) = evicted {
                sessions.remove(&id);
            }
        }

        if expired > 0 || evicted.is_some() {
            tracing::info!(
                "Session store: {} expired, evicted {:?}, {} remain",
                expired,
                evicted,
                sessions.len()
            );
        }

        sessions.insert(
            session.id,
            Entry {
                session: session.clone(),
                touched: now,
            },
        );
        Ok(session.clone())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let now = Instant::now();
        Ok(self
            .sessions
            .read()
            .await
            .values()
            .filter(|entry| !self.is_expired(entry, now))
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_then_find() {
        let repo = InMemorySessionRepository::new();
        let session = Session::new();
        repo.save(&session).await.unwrap();

        let found = repo.find_by_id(session.id).await.unwrap();
        assert_eq!(found, Some(session));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_save_replaces() {
        let repo = InMemorySessionRepository::new();
        let session = Session::new();
        repo.save(&session).await.unwrap();
        repo.save(&session.clone().with_premium(true)).await.unwrap();

        let found = repo.find_by_id(session.id).await.unwrap().unwrap();
        assert!(found.premium);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_unknown_id() {
        let repo = InMemorySessionRepository::new();
        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_idle_sessions_expire() {
        let repo = InMemorySessionRepository::with_limits(10, Duration::from_millis(50));
        let old = Session::new();
        repo.save(&old).await.unwrap();

        tokio::time::sleep(Duration::from_millis(120)).await;
        let fresh = Session::new();
        repo.save(&fresh).await.unwrap();

        assert!(repo.find_by_id(old.id).await.unwrap().is_none());
        assert!(repo.find_by_id(fresh.id).await.unwrap().is_some());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_capacity_evicts_longest_idle() {
        let repo = InMemorySessionRepository::with_limits(2, Duration::from_secs(3600));
        let first = Session::new();
        let second = Session::new();
        repo.save(&first).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        repo.save(&second).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;

        // Reading `first` makes `second` the idle one
        repo.find_by_id(first.id).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;

        let third = Session::new();
        repo.save(&third).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
        assert!(repo.find_by_id(first.id).await.unwrap().is_some());
        assert!(repo.find_by_id(second.id).await.unwrap().is_none());
        assert!(repo.find_by_id(third.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_updating_at_capacity_keeps_others() {
        let repo = InMemorySessionRepository::with_limits(2, Duration::from_secs(3600));
        let first = Session::new();
        let second = Session::new();
        repo.save(&first).await.unwrap();
        repo.save(&second).await.unwrap();

        repo.save(&first.clone().with_premium(true)).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
        assert!(repo.find_by_id(second.id).await.unwrap().is_some());
    }
}
