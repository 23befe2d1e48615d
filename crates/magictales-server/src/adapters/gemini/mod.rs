//! Google Gemini adapters
//!
//! Both the story writer and the narrator talk to `generateContent`; this
//! module holds the shared wire types and response helpers.

mod narrator;
mod story;
mod wav;

pub use narrator::GeminiNarrator;
pub use story::GeminiStoryGenerator;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

use magictales::DomainError;

pub(crate) const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// The credential travels in this header, never in the URL
pub(crate) const API_KEY_HEADER: &str = "x-goog-api-key";

// ============================================
// Request Types
// ============================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text: text.into() }],
            }],
            generation_config: None,
        }
    }

    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }
}

#[derive(Serialize)]
pub(crate) struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Serialize)]
pub(crate) struct Part {
    pub text: String,
}

#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech_config: Option<SpeechConfig>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SpeechConfig {
    pub voice_config: VoiceConfig,
    pub language_code: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VoiceConfig {
    pub prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PrebuiltVoiceConfig {
    pub voice_name: String,
}

// ============================================
// Helper Functions
// ============================================

/// POST one `generateContent` call and return the decoded JSON body.
/// Non-success statuses become `DomainError::Provider`. Transport and decode
/// errors are stripped of their URL before they reach messages or logs.
pub(crate) async fn generate_content(
    client: &Client,
    base_url: &str,
    model: &str,
    api_key: &str,
    request: &GenerateContentRequest,
) -> Result<Value, DomainError> {
    let url = format!(
        "{}/{}:generateContent",
        base_url.trim_end_matches('/'),
        model
    );

    let response = client
        .post(&url)
        .header(API_KEY_HEADER, api_key)
        .json(request)
        .send()
        .await
        .map_err(|err| DomainError::Transport(err.without_url().to_string()))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error body".to_string());
        return Err(map_http_error(status, body));
    }

    response
        .json()
        .await
        .map_err(|err| DomainError::ResponseShape(err.without_url().to_string()))
}

/// Concatenated text parts of the first candidate
pub(crate) fn extract_text(root: &Value) -> Option<String> {
    let parts = root
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let collected: Vec<&str> = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .collect();

    let joined = collected.concat();
    if joined.trim().is_empty() {
        None
    } else {
        Some(joined)
    }
}

/// First inline data part of the first candidate: `(mime_type, base64 data)`
pub(crate) fn extract_inline_data(root: &Value) -> Option<(String, String)> {
    let parts = root
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?;

    parts.iter().find_map(|part| {
        let inline = part.get("inlineData").or_else(|| part.get("inline_data"))?;
        let data = inline.get("data")?.as_str()?;
        let mime = inline
            .get("mimeType")
            .or_else(|| inline.get("mime_type"))
            .and_then(|v| v.as_str())
            .unwrap_or("audio/L16;rate=24000");
        Some((mime.to_string(), data.to_string()))
    })
}

/// Prefer the provider's `error.message`, falling back to the raw body
pub(crate) fn map_http_error(status: StatusCode, body: String) -> DomainError {
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    DomainError::Provider {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::Router;

    /// Serve a router on an ephemeral local port and return its base URL
    pub async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/v1beta/models", addr)
    }
}
