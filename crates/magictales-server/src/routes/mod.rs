//! MagicTales API Routes
//!
//! - /sessions - Session sidebar and premium toggle
//! - /sessions/:id/home, /request, /hot, /tool - Screen tabs
//! - /sessions/:id/story - Story generation and narration audio
//! - /sessions/:id/library - Saved story titles

pub mod library;
pub mod screens;
pub mod session;
pub mod story;
pub mod swagger;

use axum::http::StatusCode;

use magictales::DomainError;

/// Map a domain error onto the HTTP status the tabs show it with
pub(crate) fn error_response(err: DomainError) -> (StatusCode, String) {
    let status = match &err {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::MissingCredential(_) => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::Provider { .. }
        | DomainError::Transport(_)
        | DomainError::ResponseShape(_)
        | DomainError::Narration(_) => StatusCode::BAD_GATEWAY,
        DomainError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}
