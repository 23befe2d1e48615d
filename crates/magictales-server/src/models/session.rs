//! Session DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use magictales::Session;

use crate::application::{Capabilities, PersistenceMode};

/// Session sidebar: premium status, coins, and what this deployment can do
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub id: Uuid,
    pub premium: bool,
    pub coins: u32,
    pub app_id: String,
    pub user_id: String,
    pub persistence: PersistenceMode,
    pub generation_enabled: bool,
    /// Present while generation is disabled
    pub banner: Option<String>,
    pub library_size: usize,
    pub has_story: bool,
    pub created_at: DateTime<Utc>,
}

impl SessionResponse {
    pub fn new(session: &Session, caps: &Capabilities) -> Self {
        Self {
            id: session.id,
            premium: session.premium,
            coins: session.coins,
            app_id: caps.app_id.clone(),
            user_id: caps.user_id.clone(),
            persistence: caps.persistence,
            generation_enabled: caps.generation_enabled,
            banner: caps.missing_credential_banner(),
            library_size: session.library.len(),
            has_story: session.current.is_some(),
            created_at: session.created_at,
        }
    }
}

/// Toggle premium request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePremiumRequest {
    pub enabled: bool,
}
