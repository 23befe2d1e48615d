//! Screen Routes - Home, Story Request, Hot Stories and Tool tabs

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use super::error_response;
use crate::models::{HomeScreen, HotScreen, RequestScreen, ToolScreen};
use crate::AppState;

/// Home tab
#[utoipa::path(
    get,
    path = "/sessions/{session_id}/home",
    params(("session_id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Home tab", body = HomeScreen),
        (status = 404, description = "Session not found")
    ),
    tag = "Screens"
)]
pub async fn home_screen(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<HomeScreen>, (axum::http::StatusCode, String)> {
    let session = state
        .session_service
        .get(session_id)
        .await
        .map_err(error_response)?;

    Ok(Json(HomeScreen::for_session(&session)))
}

/// Story Request tab: option sets for the current premium state
#[utoipa::path(
    get,
    path = "/sessions/{session_id}/request",
    params(("session_id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Story request tab", body = RequestScreen),
        (status = 404, description = "Session not found")
    ),
    tag = "Screens"
)]
pub async fn request_screen(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<RequestScreen>, (axum::http::StatusCode, String)> {
    let session = state
        .session_service
        .get(session_id)
        .await
        .map_err(error_response)?;

    Ok(Json(RequestScreen::for_session(&session)))
}

/// Hot Stories tab
#[utoipa::path(
    get,
    path = "/sessions/{session_id}/hot",
    params(("session_id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Hot stories tab", body = HotScreen),
        (status = 404, description = "Session not found")
    ),
    tag = "Screens"
)]
pub async fn hot_screen(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<HotScreen>, (axum::http::StatusCode, String)> {
    let session = state
        .session_service
        .get(session_id)
        .await
        .map_err(error_response)?;

    Ok(Json(HotScreen::for_session(&session)))
}

/// Tool tab: capabilities and database reachability
#[utoipa::path(
    get,
    path = "/sessions/{session_id}/tool",
    params(("session_id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Tool tab", body = ToolScreen),
        (status = 404, description = "Session not found")
    ),
    tag = "Screens"
)]
pub async fn tool_screen(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ToolScreen>, (axum::http::StatusCode, String)> {
    state
        .session_service
        .get(session_id)
        .await
        .map_err(error_response)?;

    let database_reachable = match &state.document_db {
        Some(db) => Some(db.ping().await),
        None => None,
    };
    let active_sessions = state
        .session_service
        .count()
        .await
        .map_err(error_response)?;

    Ok(Json(ToolScreen::new(
        &state.capabilities,
        database_reachable,
        active_sessions,
    )))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sessions/:session_id/home", get(home_screen))
        .route("/sessions/:session_id/request", get(request_screen))
        .route("/sessions/:session_id/hot", get(hot_screen))
        .route("/sessions/:session_id/tool", get(tool_screen))
}
