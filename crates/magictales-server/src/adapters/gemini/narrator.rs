//! Gemini narrator
//!
//! Text-to-speech through a Gemini speech model with a prebuilt voice.
//! The whole story is sent in one request; long text is not chunked.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use std::time::Duration;

use magictales::{DomainError, Narration, Narrator};

use super::wav::{is_raw_pcm, pcm16_to_wav, sample_rate_from_mime, DEFAULT_SAMPLE_RATE};
use super::{
    extract_inline_data, generate_content, GenerateContentRequest, GenerationConfig,
    PrebuiltVoiceConfig, SpeechConfig, VoiceConfig, BASE_URL,
};

#[derive(Clone)]
pub struct GeminiNarrator {
    client: Client,
    api_key: String,
    model: String,
    voice: String,
    language_code: String,
    base_url: String,
}

impl GeminiNarrator {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        voice: impl Into<String>,
        language_code: impl Into<String>,
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
            voice: voice.into(),
            language_code: language_code.into(),
            base_url: BASE_URL.to_string(),
        })
    }

    /// Point at a different `.../models` endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn speech_request(&self, text: &str) -> GenerateContentRequest {
        GenerateContentRequest::user_text(text).with_config(GenerationConfig {
            response_modalities: Some(vec!["AUDIO".to_string()]),
            speech_config: Some(SpeechConfig {
                voice_config: VoiceConfig {
                    prebuilt_voice_config: PrebuiltVoiceConfig {
                        voice_name: self.voice.clone(),
                    },
                },
                language_code: self.language_code.clone(),
            }),
            ..Default::default()
        })
    }
}

#[async_trait]
impl Narrator for GeminiNarrator {
    async fn narrate(&self, text: &str) -> Result<Narration, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::Narration("nothing to narrate".to_string()));
        }

        let request = self.speech_request(text);
        let payload =
            generate_content(&self.client, &self.base_url, &self.model, &self.api_key, &request)
                .await
                .map_err(|err| DomainError::Narration(err.to_string()))?;

        let (mime_type, data) = extract_inline_data(&payload)
            .ok_or_else(|| DomainError::Narration("response contained no audio".to_string()))?;

        let audio = STANDARD
            .decode(data.as_bytes())
            .map_err(|err| DomainError::Narration(format!("invalid audio encoding: {err}")))?;

        if is_raw_pcm(&mime_type) {
            let rate = sample_rate_from_mime(&mime_type).unwrap_or(DEFAULT_SAMPLE_RATE);
            Ok(Narration::wav(pcm16_to_wav(&audio, rate, 1)))
        } else {
            Ok(Narration::new(audio, mime_type))
        }
    }

    fn voice(&self) -> &str {
        &self.voice
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::gemini::test_support::serve;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    async fn narrator_for(router: Router) -> GeminiNarrator {
        let base_url = serve(router).await;
        GeminiNarrator::new(
            "test-key",
            "gemini-2.5-flash-preview-tts",
            "Kore",
            "en-US",
            Duration::from_secs(5),
        )
        .unwrap()
        .with_base_url(base_url)
    }

    #[tokio::test]
    async fn test_pcm_is_wrapped_as_wav() {
        let pcm = vec![1u8, 0, 2, 0, 3, 0, 4, 0];
        let body = json!({"candidates": [{"content": {"parts": [{"inlineData": {
            "mimeType": "audio/L16;codec=pcm;rate=24000",
            "data": STANDARD.encode(&pcm),
        }}]}}]});
        let router = Router::new().route(
            "/v1beta/models/:call",
            post(move |Json(request): Json<Value>| {
                let body = body.clone();
                async move {
                    assert_eq!(
                        request["generationConfig"]["speechConfig"]["languageCode"],
                        "en-US"
                    );
                    Json(body)
                }
            }),
        );

        let narration = narrator_for(router).await.narrate("Hello Leo").await.unwrap();

        assert_eq!(narration.mime_type, "audio/wav");
        assert_eq!(narration.len(), 44 + pcm.len());
        assert_eq!(&narration.audio[44..], pcm.as_slice());
    }

    #[tokio::test]
    async fn test_provider_failure_is_a_narration_error() {
        let router = Router::new().route(
            "/v1beta/models/:call",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );

        let result = narrator_for(router).await.narrate("Hello").await;
        assert!(matches!(result, Err(DomainError::Narration(_))));
    }

    #[tokio::test]
    async fn test_empty_text_skips_network() {
        // Unroutable base URL: a network attempt would fail with a different message
        let narrator = GeminiNarrator::new("k", "m", "Kore", "en-US", Duration::from_secs(1))
            .unwrap()
            .with_base_url("http://127.0.0.1:9/v1beta/models");
        match narrator.narrate("   ").await {
            Err(DomainError::Narration(message)) => assert_eq!(message, "nothing to narrate"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_provider_does_not_leak_key() {
        let narrator = GeminiNarrator::new(
            "SECRET-KEY-123",
            "gemini-2.5-flash-preview-tts",
            "Kore",
            "en-US",
            Duration::from_secs(2),
        )
        .unwrap()
        .with_base_url("http://127.0.0.1:9/v1beta/models");

        let err = narrator.narrate("Hello Leo").await.unwrap_err();

        assert!(matches!(err, DomainError::Narration(_)));
        assert!(!err.to_string().contains("SECRET-KEY-123"));
    }
}
