//! Library Routes - Saved story titles

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use super::error_response;
use crate::models::{LibraryQuery, LibraryResponse, SaveToLibraryResponse};
use crate::AppState;

/// Save the current story's title to the library
#[utoipa::path(
    post,
    path = "/sessions/{session_id}/library",
    params(("session_id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Saved (or already present)", body = SaveToLibraryResponse),
        (status = 400, description = "No story to save"),
        (status = 404, description = "Session not found")
    ),
    tag = "Library"
)]
pub async fn save_to_library(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SaveToLibraryResponse>, (axum::http::StatusCode, String)> {
    let (session, added) = state
        .session_service
        .save_to_library(session_id)
        .await
        .map_err(error_response)?;

    let entry = session
        .current_story()
        .map(|story| story.library_title())
        .unwrap_or_default();

    Ok(Json(SaveToLibraryResponse {
        added,
        entry,
        library: LibraryResponse::new(&session.library, None),
    }))
}

/// List saved titles, optionally filtered
#[utoipa::path(
    get,
    path = "/sessions/{session_id}/library",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
        LibraryQuery
    ),
    responses(
        (status = 200, description = "Library entries", body = LibraryResponse),
        (status = 404, description = "Session not found")
    ),
    tag = "Library"
)]
pub async fn list_library(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<LibraryQuery>,
) -> Result<Json<LibraryResponse>, (axum::http::StatusCode, String)> {
    let session = state
        .session_service
        .get(session_id)
        .await
        .map_err(error_response)?;

    Ok(Json(LibraryResponse::new(
        &session.library,
        query.search.as_deref(),
    )))
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/sessions/:session_id/library",
        get(list_library).post(save_to_library),
    )
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{new_session, send_json, state_with};
    use crate::application::test_support::{FakeGenerator, FakeNarrator};
    use crate::build_router;
    use axum::http::StatusCode;
    use magictales::{Narrator, StoryGenerator};
    use serde_json::json;
    use std::sync::Arc;

    fn router() -> axum::Router {
        build_router(state_with(
            Some(Arc::new(FakeGenerator::story("text", &["a", "b", "c", "d", "e"]))
                as Arc<dyn StoryGenerator>),
            Some(Arc::new(FakeNarrator::working()) as Arc<dyn Narrator>),
        ))
    }

    #[tokio::test]
    async fn test_empty_library_message() {
        let router = router();
        let id = new_session(&router).await;

        let (status, body) =
            send_json(&router, "GET", &format!("/sessions/{id}/library"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 0);
        assert!(body["empty_message"].is_string());
    }

    #[tokio::test]
    async fn test_save_without_story_is_400() {
        let router = router();
        let id = new_session(&router).await;

        let (status, _) =
            send_json(&router, "POST", &format!("/sessions/{id}/library"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_save_twice_and_search() {
        let router = router();
        let id = new_session(&router).await;
        send_json(
            &router,
            "POST",
            &format!("/sessions/{id}/story"),
            Some(json!({"hero_name": "Leo", "level": "B1", "theme": "new_friends"})),
        )
        .await;

        let (status, first) =
            send_json(&router, "POST", &format!("/sessions/{id}/library"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["added"], true);
        assert_eq!(first["entry"], "🚀 Leo's New Friends Adventure (B1)");

        let (_, second) =
            send_json(&router, "POST", &format!("/sessions/{id}/library"), None).await;
        assert_eq!(second["added"], false);
        assert_eq!(second["library"]["total"], 1);

        let (_, hit) = send_json(
            &router,
            "GET",
            &format!("/sessions/{id}/library?search=FRIENDS"),
            None,
        )
        .await;
        assert_eq!(hit["entries"].as_array().unwrap().len(), 1);

        let (_, miss) = send_json(
            &router,
            "GET",
            &format!("/sessions/{id}/library?search=dragon"),
            None,
        )
        .await;
        assert!(miss["entries"].as_array().unwrap().is_empty());
        assert_eq!(miss["total"], 1);
        assert!(miss["empty_message"].is_null());
    }
}
