//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::application::PersistenceMode;
use crate::models::{
    FeaturedStory,
    // Screen models
    HomeScreen,
    HotScreen,
    // Library models
    LibraryResponse,
    Metric,
    RequestScreen,
    SaveToLibraryResponse,
    // Session models
    SessionResponse,
    // Story models
    StoryForm,
    StoryResponse,
    ToolScreen,
    UpdatePremiumRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Session endpoints
        super::session::create_session,
        super::session::get_session,
        super::session::update_premium,
        // Screen endpoints
        super::screens::home_screen,
        super::screens::request_screen,
        super::screens::hot_screen,
        super::screens::tool_screen,
        // Story endpoints
        super::story::generate_story,
        super::story::get_story,
        super::story::get_story_audio,
        // Library endpoints
        super::library::save_to_library,
        super::library::list_library,
    ),
    components(schemas(
        SessionResponse,
        UpdatePremiumRequest,
        PersistenceMode,
        StoryForm,
        StoryResponse,
        LibraryResponse,
        SaveToLibraryResponse,
        HomeScreen,
        Metric,
        FeaturedStory,
        RequestScreen,
        HotScreen,
        ToolScreen,
    )),
    tags(
        (name = "Session", description = "Session sidebar and premium toggle"),
        (name = "Screens", description = "Home, Story Request, Hot Stories and Tool tabs"),
        (name = "Story", description = "Story generation and narration"),
        (name = "Library", description = "Saved story titles"),
    ),
    info(
        title = "MagicTales API",
        version = "0.1.0",
        description = "Children's English story generator with CEFR-leveled vocabulary and narration"
    )
)]
pub struct ApiDoc;
