//! Story Routes - Generation and narration audio

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use super::error_response;
use crate::models::{StoryForm, StoryResponse};
use crate::AppState;

/// Generate a story and its narration
#[utoipa::path(
    post,
    path = "/sessions/{session_id}/story",
    params(("session_id" = Uuid, Path, description = "Session ID")),
    request_body = StoryForm,
    responses(
        (status = 200, description = "Story generated", body = StoryResponse),
        (status = 400, description = "Missing hero name or premium-only option"),
        (status = 404, description = "Session not found"),
        (status = 502, description = "Provider error or unexpected response"),
        (status = 503, description = "Generation credential not configured")
    ),
    tag = "Story"
)]
pub async fn generate_story(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(form): Json<StoryForm>,
) -> Result<Json<StoryResponse>, (StatusCode, String)> {
    let session = state
        .session_service
        .get(session_id)
        .await
        .map_err(error_response)?;

    let request = form.into_request(session.premium);
    let outcome = state
        .story_service
        .request_story(&session, request)
        .await
        .map_err(error_response)?;

    let session = state
        .session_service
        .store_generated(outcome.session)
        .await
        .map_err(error_response)?;

    StoryResponse::from_session(&session, outcome.warnings)
        .map(Json)
        .ok_or((
            StatusCode::INTERNAL_SERVER_ERROR,
            "Story missing after generation".to_string(),
        ))
}

/// Get the current story
#[utoipa::path(
    get,
    path = "/sessions/{session_id}/story",
    params(("session_id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Current story", body = StoryResponse),
        (status = 404, description = "Session not found or no story yet")
    ),
    tag = "Story"
)]
pub async fn get_story(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<StoryResponse>, (StatusCode, String)> {
    let session = state
        .session_service
        .get(session_id)
        .await
        .map_err(error_response)?;

    StoryResponse::from_session(&session, Vec::new())
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "No story generated yet".to_string()))
}

/// Stream the current story's narration
#[utoipa::path(
    get,
    path = "/sessions/{session_id}/story/audio",
    params(("session_id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Narration audio", content_type = "audio/wav"),
        (status = 404, description = "Session not found or no audio")
    ),
    tag = "Story"
)]
pub async fn get_story_audio(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Response, (StatusCode, String)> {
    let session = state
        .session_service
        .get(session_id)
        .await
        .map_err(error_response)?;

    let narration = session
        .current_narration()
        .ok_or((StatusCode::NOT_FOUND, "No audio for the current story".to_string()))?;

    Ok((
        [(header::CONTENT_TYPE, narration.mime_type.clone())],
        narration.audio.clone(),
    )
        .into_response())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/sessions/:session_id/story",
            get(get_story).post(generate_story),
        )
        .route("/sessions/:session_id/story/audio", get(get_story_audio))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{new_session, send, send_json, state_with};
    use crate::application::test_support::{FakeGenerator, FakeNarrator, FakeReply};
    use crate::build_router;
    use axum::http::StatusCode;
    use magictales::{Narrator, StoryGenerator};
    use serde_json::json;
    use std::sync::Arc;

    const VOCAB: [&str; 5] = ["map", "brave", "river", "cave", "friend"];

    fn router_with(generator: Arc<FakeGenerator>, narrator: Arc<FakeNarrator>) -> axum::Router {
        build_router(state_with(
            Some(generator as Arc<dyn StoryGenerator>),
            Some(narrator as Arc<dyn Narrator>),
        ))
    }

    #[tokio::test]
    async fn test_generate_story_and_fetch_audio() {
        let generator = Arc::new(FakeGenerator::story("Leo found a map.", &VOCAB));
        let router = router_with(generator.clone(), Arc::new(FakeNarrator::working()));
        let id = new_session(&router).await;

        let (status, body) = send_json(
            &router,
            "POST",
            &format!("/sessions/{id}/story"),
            Some(json!({"hero_name": "Leo", "level": "A1", "theme": "animals"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "🚀 Leo's Animals Adventure");
        assert_eq!(body["text"], "Leo found a map.");
        assert_eq!(body["vocab"], json!(VOCAB));
        assert_eq!(body["level"], "A1");
        assert_eq!(body["has_audio"], true);
        assert_eq!(generator.calls(), 1);

        let (status, audio) = send(&router, "GET", &format!("/sessions/{id}/story/audio"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(audio, b"Leo found a map.".to_vec());
    }

    #[tokio::test]
    async fn test_empty_hero_is_400_without_network() {
        let generator = Arc::new(FakeGenerator::story("x", &VOCAB));
        let router = router_with(generator.clone(), Arc::new(FakeNarrator::working()));
        let id = new_session(&router).await;

        let (status, _) = send_json(
            &router,
            "POST",
            &format!("/sessions/{id}/story"),
            Some(json!({"hero_name": ""})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_credential_is_503() {
        let router = build_router(state_with(None, None));
        let id = new_session(&router).await;

        let (status, body) = send_json(
            &router,
            "POST",
            &format!("/sessions/{id}/story"),
            Some(json!({"hero_name": "Leo"})),
        )
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.as_str().unwrap().contains("GEMINI_API_KEY"));
    }

    #[tokio::test]
    async fn test_provider_error_stores_no_story() {
        let generator = Arc::new(FakeGenerator::new(FakeReply::Provider(
            400,
            "API key not valid".to_string(),
        )));
        let router = router_with(generator, Arc::new(FakeNarrator::working()));
        let id = new_session(&router).await;

        let (status, body) = send_json(
            &router,
            "POST",
            &format!("/sessions/{id}/story"),
            Some(json!({"hero_name": "Leo"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.as_str().unwrap().contains("API key not valid"));

        let (status, _) = send_json(&router, "GET", &format!("/sessions/{id}/story"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_narration_failure_returns_story_with_warning() {
        let generator = Arc::new(FakeGenerator::story("A quiet night.", &VOCAB));
        let router = router_with(generator, Arc::new(FakeNarrator::failing()));
        let id = new_session(&router).await;

        let (status, body) = send_json(
            &router,
            "POST",
            &format!("/sessions/{id}/story"),
            Some(json!({"hero_name": "Mia"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["has_audio"], false);
        assert!(body["audio_url"].is_null());
        assert_eq!(body["warnings"].as_array().unwrap().len(), 1);

        let (status, _) = send(&router, "GET", &format!("/sessions/{id}/story/audio"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
