//! Session Routes - Sidebar state and premium toggle
//!
//! HTTP handlers that delegate to SessionService.

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use super::error_response;
use crate::models::{SessionResponse, UpdatePremiumRequest};
use crate::AppState;

/// Create a new session
#[utoipa::path(
    post,
    path = "/sessions",
    responses(
        (status = 200, description = "Session created", body = SessionResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Session"
)]
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<Json<SessionResponse>, (axum::http::StatusCode, String)> {
    let session = state
        .session_service
        .create()
        .await
        .map_err(error_response)?;

    Ok(Json(SessionResponse::new(&session, &state.capabilities)))
}

/// Get session sidebar state
#[utoipa::path(
    get,
    path = "/sessions/{session_id}",
    params(("session_id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Session state", body = SessionResponse),
        (status = 404, description = "Session not found")
    ),
    tag = "Session"
)]
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionResponse>, (axum::http::StatusCode, String)> {
    let session = state
        .session_service
        .get(session_id)
        .await
        .map_err(error_response)?;

    Ok(Json(SessionResponse::new(&session, &state.capabilities)))
}

/// Toggle the premium flag
#[utoipa::path(
    put,
    path = "/sessions/{session_id}/premium",
    params(("session_id" = Uuid, Path, description = "Session ID")),
    request_body = UpdatePremiumRequest,
    responses(
        (status = 200, description = "Premium flag updated", body = SessionResponse),
        (status = 404, description = "Session not found")
    ),
    tag = "Session"
)]
pub async fn update_premium(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<UpdatePremiumRequest>,
) -> Result<Json<SessionResponse>, (axum::http::StatusCode, String)> {
    let session = state
        .session_service
        .set_premium(session_id, payload.enabled)
        .await
        .map_err(error_response)?;

    Ok(Json(SessionResponse::new(&session, &state.capabilities)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/sessions/:session_id", get(get_session))
        .route("/sessions/:session_id/premium", put(update_premium))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{new_session, send_json, state_with};
    use crate::build_router;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_new_session_without_key_shows_banner() {
        let router = build_router(state_with(None, None));
        let (status, body) = send_json(&router, "POST", "/sessions", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["premium"], false);
        assert_eq!(body["coins"], 100);
        assert_eq!(body["generation_enabled"], false);
        assert_eq!(body["persistence"], "in_memory");
        assert_eq!(body["user_id"], "local_user_456");
        assert!(body["banner"].as_str().unwrap().contains("GEMINI_API_KEY"));
    }

    #[tokio::test]
    async fn test_premium_toggle() {
        let router = build_router(state_with(None, None));
        let id = new_session(&router).await;

        let (status, body) = send_json(
            &router,
            "PUT",
            &format!("/sessions/{id}/premium"),
            Some(json!({"enabled": true})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["premium"], true);

        let (_, body) = send_json(&router, "GET", &format!("/sessions/{id}"), None).await;
        assert_eq!(body["premium"], true);
    }

    #[tokio::test]
    async fn test_unknown_session_is_404() {
        let router = build_router(state_with(None, None));
        let (status, _) = send_json(
            &router,
            "GET",
            "/sessions/00000000-0000-0000-0000-000000000000",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
