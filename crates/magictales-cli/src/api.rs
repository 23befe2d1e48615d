//! MagicTales API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API Client for the MagicTales server
pub struct MagicTalesClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub premium: bool,
    pub coins: u32,
    pub app_id: String,
    pub user_id: String,
    pub persistence: String,
    pub generation_enabled: bool,
    pub banner: Option<String>,
    pub library_size: usize,
    pub has_story: bool,
}

#[derive(Debug, Serialize)]
struct UpdatePremiumRequest {
    enabled: bool,
}

#[derive(Debug, Default, Serialize)]
pub struct StoryForm {
    pub hero_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superpower: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StoryResponse {
    pub title: String,
    pub text: String,
    pub vocab: Vec<String>,
    pub level: String,
    pub has_audio: bool,
    #[serde(default)]
    pub warnings: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct LevelOption {
    pub level: String,
    pub label: String,
    pub hint: String,
}

#[derive(Debug, Deserialize)]
pub struct LengthOption {
    pub length: String,
    pub label: String,
    pub word_count: u32,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub struct OptionCatalog {
    pub levels: Vec<LevelOption>,
    pub lengths: Vec<LengthOption>,
    pub styles: Vec<Choice>,
    pub themes: Vec<Choice>,
    pub superpowers: Vec<Choice>,
    pub superpower_locked: bool,
}

#[derive(Debug, Deserialize)]
pub struct RequestScreen {
    pub premium: bool,
    pub options: OptionCatalog,
    pub current_story: Option<StoryResponse>,
}

#[derive(Debug, Deserialize)]
pub struct LibraryResponse {
    pub entries: Vec<String>,
    pub total: usize,
    pub empty_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SaveToLibraryResponse {
    pub added: bool,
    pub entry: String,
    pub library: LibraryResponse,
}

#[derive(Debug, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub delta: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FeaturedStory {
    pub title: String,
    pub image_url: String,
    pub caption: String,
}

#[derive(Debug, Deserialize)]
pub struct HomeScreen {
    pub metrics: Vec<Metric>,
    pub reward_progress: f32,
    pub reward_caption: String,
    pub premium_feature: Option<FeaturedStory>,
    pub classic_stories: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct HotScreen {
    pub title: String,
    pub themes: Vec<String>,
    pub locked: bool,
}

#[derive(Debug, Deserialize)]
pub struct ToolScreen {
    pub app_id: String,
    pub user_id: String,
    pub persistence: String,
    pub database_reachable: Option<bool>,
    pub generation_enabled: bool,
    pub text_model: Option<String>,
    pub narration_enabled: bool,
    pub speech_model: Option<String>,
    pub voice: Option<String>,
    pub active_sessions: usize,
}

impl MagicTalesClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    pub async fn create_session(&self) -> Result<SessionResponse> {
        let url = format!("{}/sessions", self.base_url);
        let resp = self
            .client
            .post(&url)
            .send()
            .await
            .context("Failed to connect to MagicTales API")?;
        parse(resp).await
    }

    pub async fn get_session(&self, session_id: Uuid) -> Result<SessionResponse> {
        self.get(&format!("/sessions/{}", session_id)).await
    }

    pub async fn set_premium(&self, session_id: Uuid, enabled: bool) -> Result<SessionResponse> {
        let url = format!("{}/sessions/{}/premium", self.base_url, session_id);
        let resp = self
            .client
            .put(&url)
            .json(&UpdatePremiumRequest { enabled })
            .send()
            .await
            .context("Failed to connect to MagicTales API")?;
        parse(resp).await
    }

    pub async fn request_screen(&self, session_id: Uuid) -> Result<RequestScreen> {
        self.get(&format!("/sessions/{}/request", session_id)).await
    }

    pub async fn home_screen(&self, session_id: Uuid) -> Result<HomeScreen> {
        self.get(&format!("/sessions/{}/home", session_id)).await
    }

    pub async fn hot_screen(&self, session_id: Uuid) -> Result<HotScreen> {
        self.get(&format!("/sessions/{}/hot", session_id)).await
    }

    pub async fn tool_screen(&self, session_id: Uuid) -> Result<ToolScreen> {
        self.get(&format!("/sessions/{}/tool", session_id)).await
    }

    /// Generate a story; may take a while because narration runs too
    pub async fn generate_story(&self, session_id: Uuid, form: &StoryForm) -> Result<StoryResponse> {
        let url = format!("{}/sessions/{}/story", self.base_url, session_id);
        let resp = self
            .client
            .post(&url)
            .json(form)
            .send()
            .await
            .context("Failed to connect to MagicTales API")?;
        parse(resp).await
    }

    /// Download the narration of the current story
    pub async fn story_audio(&self, session_id: Uuid) -> Result<Vec<u8>> {
        let url = format!("{}/sessions/{}/story/audio", self.base_url, session_id);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to MagicTales API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let bytes = resp.bytes().await.context("Failed to read audio")?;
        Ok(bytes.to_vec())
    }

    pub async fn save_to_library(&self, session_id: Uuid) -> Result<SaveToLibraryResponse> {
        let url = format!("{}/sessions/{}/library", self.base_url, session_id);
        let resp = self
            .client
            .post(&url)
            .send()
            .await
            .context("Failed to connect to MagicTales API")?;
        parse(resp).await
    }

    pub async fn list_library(
        &self,
        session_id: Uuid,
        search: Option<&str>,
    ) -> Result<LibraryResponse> {
        let mut path = format!("/sessions/{}/library", session_id);
        if let Some(term) = search {
            path.push_str(&format!("?search={}", urlencoding::encode(term)));
        }
        self.get(&path).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to MagicTales API")?;
        parse(resp).await
    }
}

async fn parse<T: DeserializeOwned>(resp: Response) -> Result<T> {
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("API error ({}): {}", status, body);
    }

    resp.json().await.context("Failed to parse response")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_screen_reads_premium_and_current_story() {
        let body = json!({
            "premium": true,
            "options": {
                "premium": true,
                "levels": [{"level": "A1", "label": "A1 (Beginner)", "hint": "Short sentences."}],
                "lengths": [{"length": "3min", "label": "3 min", "word_count": 300}],
                "styles": [{"value": "warm", "label": "Warm"}],
                "themes": [{"value": "courage", "label": "Courage"}],
                "superpowers": [{"value": "flight", "label": "Flight"}],
                "superpower_locked": false
            },
            "current_story": {
                "title": "🚀 Leo's Courage Adventure",
                "text": "Leo was brave.",
                "vocab": ["brave"],
                "level": "A1",
                "has_audio": false,
                "audio_url": null
            }
        });

        let screen: RequestScreen = serde_json::from_value(body).unwrap();

        assert!(screen.premium);
        assert!(!screen.options.superpower_locked);
        let story = screen.current_story.unwrap();
        assert_eq!(story.title, "🚀 Leo's Courage Adventure");
        assert!(story.warnings.is_empty());
    }

    #[test]
    fn test_story_form_skips_unset_fields() {
        let form = StoryForm {
            hero_name: "Leo".to_string(),
            level: Some("A2+".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value, json!({"hero_name": "Leo", "level": "A2+"}));
    }
}
