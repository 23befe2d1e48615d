//! Capabilities decided once at startup
//!
//! Every optional dependency resolves to present/absent here, and the rest of
//! the server reads the flags instead of probing for failures.

use serde::Serialize;
use utoipa::ToSchema;

use crate::config::AppConfig;

pub const CONNECTED_USER_ID: &str = "stream_user_123";
pub const LOCAL_USER_ID: &str = "local_user_456";

/// Where durable data would go. Sessions stay in memory either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PersistenceMode {
    DocumentDb,
    InMemory,
}

#[derive(Debug, Clone)]
pub struct Capabilities {
    pub app_id: String,
    pub user_id: String,
    pub persistence: PersistenceMode,
    pub generation_enabled: bool,
    pub narration_enabled: bool,
    pub text_model: Option<String>,
    pub speech_model: Option<String>,
    pub voice: Option<String>,
}

impl Capabilities {
    pub fn decide(config: &AppConfig, document_db_connected: bool) -> Self {
        let has_key = config.gemini_api_key.is_some();
        let (persistence, user_id) = if document_db_connected {
            (PersistenceMode::DocumentDb, CONNECTED_USER_ID)
        } else {
            (PersistenceMode::InMemory, LOCAL_USER_ID)
        };

        Self {
            app_id: config.app_id.clone(),
            user_id: user_id.to_string(),
            persistence,
            generation_enabled: has_key,
            narration_enabled: has_key,
            text_model: has_key.then(|| config.text_model.clone()),
            speech_model: has_key.then(|| config.speech_model.clone()),
            voice: has_key.then(|| config.voice.clone()),
        }
    }

    /// Banner shown while generation is disabled
    pub fn missing_credential_banner(&self) -> Option<String> {
        (!self.generation_enabled).then(|| {
            "GEMINI_API_KEY is not configured - story generation is disabled".to_string()
        })
    }
}
