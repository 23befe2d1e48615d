use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::{DocumentDb, GeminiNarrator, GeminiStoryGenerator, InMemorySessionRepository};
use application::{Capabilities, SessionService, StoryService};
use config::AppConfig;
use magictales::{Narrator, StoryGenerator};

/// Type alias for the session service with its concrete repository
pub type AppSessionService = SessionService<InMemorySessionRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<AppSessionService>,
    pub story_service: Arc<StoryService>,
    pub capabilities: Arc<Capabilities>,
    pub document_db: Option<DocumentDb>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "MagicTales API is running - once upon a time...".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the router over a prepared state
pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::session::router())
        .merge(routes::screens::router())
        .merge(routes::story::router())
        .merge(routes::library::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

type Providers = (Option<Arc<dyn StoryGenerator>>, Option<Arc<dyn Narrator>>);

/// Gemini writer and narrator; a provider whose client cannot be built is left disabled
fn build_providers(config: &AppConfig, key: &str) -> Providers {
    let generator = match GeminiStoryGenerator::new(
        key,
        config.text_model.clone(),
        config.generation_timeout,
    ) {
        Ok(generator) => {
            tracing::info!("✍️  Story generation enabled ({})", config.text_model);
            Some(Arc::new(generator) as Arc<dyn StoryGenerator>)
        }
        Err(e) => {
            tracing::warn!("⚠️  Story generation disabled: {}", e);
            None
        }
    };

    let narrator = match GeminiNarrator::new(
        key,
        config.speech_model.clone(),
        config.voice.clone(),
        config.language_code.clone(),
        config.narration_timeout,
    ) {
        Ok(narrator) => {
            tracing::info!(
                "🔊 Narration enabled, voice {} ({})",
                config.voice,
                config.speech_model
            );
            Some(Arc::new(narrator) as Arc<dyn Narrator>)
        }
        Err(e) => {
            tracing::warn!("⚠️  Narration disabled: {}", e);
            None
        }
    };

    (generator, narrator)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🦄 MagicTales API initializing...");

    let config = AppConfig::from_secrets(&secrets);

    // Optional document database, decided once
    let document_db = match &config.document_db_url {
        Some(url) => match DocumentDb::connect(url).await {
            Ok(db) => {
                tracing::info!("🗄️  Document database connected");
                Some(db)
            }
            Err(e) => {
                tracing::warn!("⚠️  Document database unavailable ({}) - using in-memory mode", e);
                None
            }
        },
        None => {
            tracing::warn!("⚠️  No DOCUMENT_DB_URL set - using in-memory mode");
            None
        }
    };

    // Story providers, only with a credential
    let (generator, narrator) = match &config.gemini_api_key {
        Some(key) => build_providers(&config, key),
        None => {
            tracing::warn!("⚠️  No GEMINI_API_KEY set - story generation disabled");
            (None, None)
        }
    };

    let mut capabilities = Capabilities::decide(&config, document_db.is_some());
    capabilities.generation_enabled = generator.is_some();
    capabilities.narration_enabled = narrator.is_some();

    let sessions = InMemorySessionRepository::with_limits(config.max_sessions, config.session_idle_ttl);
    tracing::info!(
        "🗂️  Sessions: up to {}, expiring after {}s idle",
        config.max_sessions,
        config.session_idle_ttl.as_secs()
    );

    let state = AppState {
        session_service: Arc::new(SessionService::new(Arc::new(sessions))),
        story_service: Arc::new(StoryService::new(generator, narrator)),
        capabilities: Arc::new(capabilities),
        document_db,
    };

    let router = build_router(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ MagicTales API ready");

    Ok(router.into())
}
