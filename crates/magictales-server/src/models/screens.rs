//! Screen DTOs - one per tab

use serde::Serialize;
use utoipa::ToSchema;

use magictales::{OptionCatalog, Session, StoryTheme};

use super::StoryResponse;
use crate::application::{Capabilities, PersistenceMode};

pub const CLASSIC_STORIES: [&str; 2] = ["Three Little Pigs", "The Lion and Mouse"];

#[derive(Debug, Serialize, ToSchema)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub delta: Option<String>,
}

impl Metric {
    fn new(label: &str, value: &str, delta: Option<&str>) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            delta: delta.map(String::from),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FeaturedStory {
    pub title: String,
    pub image_url: String,
    pub caption: String,
}

/// Home tab: learning progress and story shelves
#[derive(Debug, Serialize, ToSchema)]
pub struct HomeScreen {
    pub metrics: Vec<Metric>,
    /// 0.0 - 1.0
    pub reward_progress: f32,
    pub reward_caption: String,
    /// Premium-only featured story
    pub premium_feature: Option<FeaturedStory>,
    pub classic_stories: Vec<String>,
}

impl HomeScreen {
    /// Progress metrics are fixed showcase values
    pub fn for_session(session: &Session) -> Self {
        let reward_progress = 0.6_f32;
        Self {
            metrics: vec![
                Metric::new("Stories this week", "3", None),
                Metric::new("Login streak", "5 days", Some("🔥")),
                Metric::new("Total vocabulary", "520", Some("+12%")),
            ],
            reward_progress,
            reward_caption: format!(
                "{:.0}% to go until the next reward",
                (1.0 - reward_progress) * 100.0
            ),
            premium_feature: session.premium.then(|| FeaturedStory {
                title: "Premium Hot Story".to_string(),
                image_url: "https://placehold.co/400x150/8a2be2/ffffff?text=VIP+Adventure"
                    .to_string(),
                caption: "An exclusive theme only VIP members can read".to_string(),
            }),
            classic_stories: CLASSIC_STORIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Story Request tab: options for the current premium state plus the last story
#[derive(Debug, Serialize, ToSchema)]
pub struct RequestScreen {
    pub premium: bool,
    #[schema(value_type = Object)]
    pub options: OptionCatalog,
    pub current_story: Option<StoryResponse>,
}

impl RequestScreen {
    pub fn for_session(session: &Session) -> Self {
        Self {
            premium: session.premium,
            options: OptionCatalog::for_premium(session.premium),
            current_story: StoryResponse::from_session(session, Vec::new()),
        }
    }
}

/// Hot Stories tab
#[derive(Debug, Serialize, ToSchema)]
pub struct HotScreen {
    pub title: String,
    pub themes: Vec<String>,
    /// Whether these themes are locked for this session
    pub locked: bool,
}

impl HotScreen {
    pub fn for_session(session: &Session) -> Self {
        Self {
            title: "Hot themes this week".to_string(),
            themes: StoryTheme::PREMIUM
                .iter()
                .map(|t| t.label().to_string())
                .collect(),
            locked: !session.premium,
        }
    }
}

/// Tool tab: deployment diagnostics
#[derive(Debug, Serialize, ToSchema)]
pub struct ToolScreen {
    pub app_id: String,
    pub user_id: String,
    pub persistence: PersistenceMode,
    /// `None` when no database is configured
    pub database_reachable: Option<bool>,
    pub generation_enabled: bool,
    pub text_model: Option<String>,
    pub narration_enabled: bool,
    pub speech_model: Option<String>,
    pub voice: Option<String>,
    pub active_sessions: usize,
}

impl ToolScreen {
    pub fn new(caps: &Capabilities, database_reachable: Option<bool>, active_sessions: usize) -> Self {
        Self {
            app_id: caps.app_id.clone(),
            user_id: caps.user_id.clone(),
            persistence: caps.persistence,
            database_reachable,
            generation_enabled: caps.generation_enabled,
            text_model: caps.text_model.clone(),
            narration_enabled: caps.narration_enabled,
            speech_model: caps.speech_model.clone(),
            voice: caps.voice.clone(),
            active_sessions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_premium_feature_follows_flag() {
        let free = HomeScreen::for_session(&Session::new());
        assert!(free.premium_feature.is_none());
        assert_eq!(free.reward_caption, "40% to go until the next reward");
        assert_eq!(free.classic_stories.len(), 2);

        let premium = HomeScreen::for_session(&Session::new().with_premium(true));
        assert!(premium.premium_feature.is_some());
    }

    #[test]
    fn test_hot_screen_locked_without_premium() {
        assert!(HotScreen::for_session(&Session::new()).locked);
        assert!(!HotScreen::for_session(&Session::new().with_premium(true)).locked);
    }
}
