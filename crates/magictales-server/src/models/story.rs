//! Story DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use magictales::domain::themes_for;
use magictales::{
    CefrLevel, Session, StoryLength, StoryRequest, StoryStyle, StoryTheme, Superpower,
};

/// Story request form. Omitted choices fall back to the first offered option.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct StoryForm {
    #[serde(default)]
    pub hero_name: String,
    pub pet_name: Option<String>,
    pub city: Option<String>,
    pub favorite_color: Option<String>,
    /// A0, A1, A1+, A2, A2+, B1, B2
    #[schema(value_type = Option<String>, example = "A1")]
    pub level: Option<CefrLevel>,
    /// 3min, 5min, 8min, 12min
    #[schema(value_type = Option<String>, example = "5min")]
    pub length: Option<StoryLength>,
    /// warm, adventure, funny
    #[schema(value_type = Option<String>, example = "warm")]
    pub style: Option<StoryStyle>,
    /// first_day, animals, new_friends (free) or school_anxiety, courage, sharing, focus (premium)
    #[schema(value_type = Option<String>, example = "animals")]
    pub theme: Option<StoryTheme>,
    /// none, invisibility, flight, fire_breath (premium)
    #[schema(value_type = Option<String>, example = "none")]
    pub superpower: Option<Superpower>,
}

impl StoryForm {
    /// Fill omitted choices using the option sets offered for `premium`
    pub fn into_request(self, premium: bool) -> StoryRequest {
        StoryRequest {
            hero_name: self.hero_name,
            pet_name: self.pet_name,
            city: self.city,
            favorite_color: self.favorite_color,
            level: self.level.unwrap_or_default(),
            length: self.length.unwrap_or_default(),
            style: self.style.unwrap_or_default(),
            theme: self
                .theme
                .unwrap_or_else(|| themes_for(premium)[0]),
            superpower: self.superpower.unwrap_or_default(),
        }
    }
}

/// Generated story as displayed
#[derive(Debug, Serialize, ToSchema)]
pub struct StoryResponse {
    pub title: String,
    pub text: String,
    pub vocab: Vec<String>,
    pub level: String,
    pub has_audio: bool,
    pub audio_url: Option<String>,
    /// Non-fatal problems, e.g. narration failed
    pub warnings: Vec<String>,
}

impl StoryResponse {
    /// Build from the session's current story, if any
    pub fn from_session(session: &Session, warnings: Vec<String>) -> Option<Self> {
        let story = session.current_story()?;
        let has_audio = session.current_narration().is_some();
        Some(Self {
            title: story.title.clone(),
            text: story.text.clone(),
            vocab: story.vocab.clone(),
            level: story.level.code().to_string(),
            has_audio,
            audio_url: has_audio.then(|| audio_url(session.id)),
            warnings,
        })
    }
}

pub fn audio_url(session_id: Uuid) -> String {
    format!("/sessions/{}/story/audio", session_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_defaults_follow_premium_state() {
        let form = StoryForm {
            hero_name: "Leo".to_string(),
            ..Default::default()
        };
        assert_eq!(form.into_request(false).theme, StoryTheme::FirstDay);

        let form = StoryForm {
            hero_name: "Leo".to_string(),
            ..Default::default()
        };
        assert_eq!(form.into_request(true).theme, StoryTheme::SchoolAnxiety);
    }

    #[test]
    fn test_form_parses_wire_values() {
        let form: StoryForm = serde_json::from_str(
            r#"{"hero_name": "Leo", "level": "A2+", "length": "8min", "style": "funny", "theme": "animals"}"#,
        )
        .unwrap();
        let request = form.into_request(false);
        assert_eq!(request.level, CefrLevel::A2Plus);
        assert_eq!(request.target_word_count(), 800);
        assert_eq!(request.style, StoryStyle::Funny);
        assert_eq!(request.theme, StoryTheme::Animals);
    }
}
