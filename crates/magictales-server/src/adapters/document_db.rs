//! Optional document database
//!
//! Connected once at startup when `DOCUMENT_DB_URL` is set. The handle is
//! only used to report reachability; sessions and the library stay in memory.

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use magictales::DomainError;

#[derive(Clone)]
pub struct DocumentDb {
    pool: PgPool,
}

impl DocumentDb {
    pub async fn connect(url: &str) -> Result<Self, DomainError> {
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .acquire_timeout(Duration::from_secs(5))
            .connect(url)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Round-trip a trivial query
    pub async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}
