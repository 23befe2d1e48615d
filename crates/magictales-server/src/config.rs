//! Server configuration
//!
//! Read once at startup from the Shuttle secret store (`Secrets.toml` when
//! running locally). Missing values never abort startup: they switch the
//! dependent feature off.

use std::time::Duration;

pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_SPEECH_MODEL: &str = "gemini-2.5-flash-preview-tts";
pub const DEFAULT_VOICE: &str = "Kore";
pub const DEFAULT_LANGUAGE_CODE: &str = "en-US";
pub const DEFAULT_APP_ID: &str = "default-app-id";

const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 60;
const DEFAULT_NARRATION_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_SESSION_IDLE_TTL_SECS: u64 = 3600;
pub const DEFAULT_MAX_SESSIONS: usize = 1000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Gemini credential; `None` disables story generation and narration
    pub gemini_api_key: Option<String>,
    pub text_model: String,
    pub speech_model: String,
    pub voice: String,
    pub language_code: String,
    pub generation_timeout: Duration,
    pub narration_timeout: Duration,
    /// Optional document database; `None` keeps everything in memory
    pub document_db_url: Option<String>,
    pub app_id: String,
    /// Sessions untouched this long are dropped
    pub session_idle_ttl: Duration,
    /// Oldest-idle session is evicted beyond this many
    pub max_sessions: usize,
}

impl AppConfig {
    pub fn from_secrets(secrets: &shuttle_runtime::SecretStore) -> Self {
        Self::from_lookup(|key| secrets.get(key))
    }

    /// Build from any key lookup. Blank values count as absent.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let secs = |key: &str, default: u64| {
            get(key)
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|&v| v > 0)
                .unwrap_or(default)
        };

        Self {
            gemini_api_key: get("GEMINI_API_KEY"),
            text_model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string()),
            speech_model: get("GEMINI_TTS_MODEL")
                .unwrap_or_else(|| DEFAULT_SPEECH_MODEL.to_string()),
            voice: get("TTS_VOICE").unwrap_or_else(|| DEFAULT_VOICE.to_string()),
            language_code: get("TTS_LANGUAGE_CODE")
                .unwrap_or_else(|| DEFAULT_LANGUAGE_CODE.to_string()),
            generation_timeout: Duration::from_secs(secs(
                "GENERATION_TIMEOUT_SECS",
                DEFAULT_GENERATION_TIMEOUT_SECS,
            )),
            narration_timeout: Duration::from_secs(secs(
                "NARRATION_TIMEOUT_SECS",
                DEFAULT_NARRATION_TIMEOUT_SECS,
            )),
            document_db_url: get("DOCUMENT_DB_URL"),
            app_id: get("APP_ID").unwrap_or_else(|| DEFAULT_APP_ID.to_string()),
            session_idle_ttl: Duration::from_secs(secs(
                "SESSION_IDLE_TTL_SECS",
                DEFAULT_SESSION_IDLE_TTL_SECS,
            )),
            max_sessions: secs("MAX_SESSIONS", DEFAULT_MAX_SESSIONS as u64) as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_empty() {
        let config = config_from(&[]);
        assert!(config.gemini_api_key.is_none());
        assert!(config.document_db_url.is_none());
        assert_eq!(config.text_model, DEFAULT_TEXT_MODEL);
        assert_eq!(config.speech_model, DEFAULT_SPEECH_MODEL);
        assert_eq!(config.voice, "Kore");
        assert_eq!(config.app_id, "default-app-id");
        assert_eq!(config.generation_timeout, Duration::from_secs(60));
        assert_eq!(config.session_idle_ttl, Duration::from_secs(3600));
        assert_eq!(config.max_sessions, 1000);
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let config = config_from(&[("GEMINI_API_KEY", "   ")]);
        assert!(config.gemini_api_key.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-2.0-flash"),
            ("APP_ID", "magic-app"),
            ("GENERATION_TIMEOUT_SECS", "15"),
            ("NARRATION_TIMEOUT_SECS", "not-a-number"),
            ("MAX_SESSIONS", "50"),
        ]);
        assert_eq!(config.gemini_api_key.as_deref(), Some("secret"));
        assert_eq!(config.text_model, "gemini-2.0-flash");
        assert_eq!(config.app_id, "magic-app");
        assert_eq!(config.generation_timeout, Duration::from_secs(15));
        assert_eq!(config.narration_timeout, Duration::from_secs(120));
        assert_eq!(config.max_sessions, 50);
    }
}
