//! Gemini story writer
//!
//! One `generateContent` call with `responseMimeType: application/json`.
//! The first candidate's text must itself be the `{story, vocab}` object.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use magictales::{DomainError, StoryGenerator, StoryPayload};

use super::{extract_text, generate_content, GenerateContentRequest, GenerationConfig, BASE_URL};

#[derive(Clone)]
pub struct GeminiStoryGenerator {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiStoryGenerator {
    /// Create a generator with a fixed per-request timeout
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| DomainError::Transport(format!("HTTP client setup failed: {err}")))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: BASE_URL.to_string(),
        })
    }

    /// Point at a different `.../models` endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl StoryGenerator for GeminiStoryGenerator {
    async fn generate(&self, prompt: &str) -> Result<StoryPayload, DomainError> {
        let request = GenerateContentRequest::user_text(prompt).with_config(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            ..Default::default()
        });

        let payload =
            generate_content(&self.client, &self.base_url, &self.model, &self.api_key, &request)
                .await?;

        let text = extract_text(&payload).ok_or_else(|| {
            DomainError::ResponseShape("response contained no text".to_string())
        })?;

        parse_story_payload(&text)
    }

    fn provider_name(&self) -> &str {
        "google"
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

/// Parse the model's text as the story object, tolerating a Markdown fence
fn parse_story_payload(text: &str) -> Result<StoryPayload, DomainError> {
    serde_json::from_str::<StoryPayload>(strip_code_fence(text))
        .map_err(|err| DomainError::ResponseShape(err.to_string()))
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop an optional language tag on the opening line
    let body = rest
        .split_once('\n')
        .map(|(_, body)| body)
        .unwrap_or(rest);
    body.trim_end().trim_end_matches("```").trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::gemini::test_support::serve;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    fn candidate_with_text(text: &str) -> Value {
        json!({"candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]})
    }

    async fn generator_for(router: Router) -> GeminiStoryGenerator {
        let base_url = serve(router).await;
        GeminiStoryGenerator::new("test-key", "gemini-2.5-flash", Duration::from_secs(5))
            .unwrap()
            .with_base_url(base_url)
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("  {\"a\":1} "), "{\"a\":1}");
    }

    #[tokio::test]
    async fn test_generate_parses_story_and_vocab() {
        let body = candidate_with_text(
            r#"{"story": "Leo found a map.", "vocab": ["map", "brave", "river", "cave", "friend"]}"#,
        );
        let router = Router::new().route(
            "/v1beta/models/:call",
            post(move |Json(request): Json<Value>| {
                let body = body.clone();
                async move {
                    assert_eq!(
                        request["generationConfig"]["responseMimeType"],
                        "application/json"
                    );
                    Json(body)
                }
            }),
        );

        let generator = generator_for(router).await;
        let payload = generator.generate("write a story").await.unwrap();

        assert_eq!(payload.story, "Leo found a map.");
        assert_eq!(payload.vocab.len(), 5);
        assert_eq!(payload.vocab[0], "map");
    }

    #[tokio::test]
    async fn test_non_success_surfaces_provider_message() {
        let router = Router::new().route(
            "/v1beta/models/:call",
            post(|| async {
                (
                    StatusCode::FORBIDDEN,
                    Json(json!({"error": {"code": 403, "message": "Billing account not enabled"}})),
                )
            }),
        );

        let generator = generator_for(router).await;
        match generator.generate("prompt").await {
            Err(DomainError::Provider { status, message }) => {
                assert_eq!(status, 403);
                assert_eq!(message, "Billing account not enabled");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_story_is_a_shape_error() {
        let body = candidate_with_text("Once upon a time, without any JSON.");
        let router = Router::new().route(
            "/v1beta/models/:call",
            post(move || {
                let body = body.clone();
                async move { Json(body) }
            }),
        );

        let generator = generator_for(router).await;
        assert!(matches!(
            generator.generate("prompt").await,
            Err(DomainError::ResponseShape(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_key_in_payload_is_a_shape_error() {
        let body = candidate_with_text(r#"{"story": "only a story"}"#);
        let router = Router::new().route(
            "/v1beta/models/:call",
            post(move || {
                let body = body.clone();
                async move { Json(body) }
            }),
        );

        let generator = generator_for(router).await;
        assert!(matches!(
            generator.generate("prompt").await,
            Err(DomainError::ResponseShape(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_provider_does_not_leak_key() {
        let generator =
            GeminiStoryGenerator::new("SECRET-KEY-123", "gemini-2.5-flash", Duration::from_secs(2))
                .unwrap()
                .with_base_url("http://127.0.0.1:9/v1beta/models");

        let err = generator.generate("prompt").await.unwrap_err();

        assert!(matches!(err, DomainError::Transport(_)));
        assert!(!err.to_string().contains("SECRET-KEY-123"));
    }

    #[tokio::test]
    async fn test_timeout_is_enforced() {
        let router = Router::new().route(
            "/v1beta/models/:call",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({}))
            }),
        );
        let base_url = serve(router).await;
        let generator =
            GeminiStoryGenerator::new("SECRET-KEY-123", "gemini-2.5-flash", Duration::from_millis(200))
                .unwrap()
                .with_base_url(base_url);

        let started = std::time::Instant::now();
        let err = generator.generate("prompt").await.unwrap_err();

        assert!(matches!(err, DomainError::Transport(_)));
        assert!(started.elapsed() < Duration::from_secs(4));
        assert!(!err.to_string().contains("SECRET-KEY-123"));
    }
}
