//! Story - Request, provider payload, and result

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{CefrLevel, StoryLength, StoryStyle, StoryTheme, Superpower};

/// Number of vocabulary words the prompt asks for
pub const VOCAB_SIZE: usize = 5;

/// Everything the user filled in on the story request screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoryRequest {
    pub hero_name: String,
    #[serde(default)]
    pub pet_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub favorite_color: Option<String>,
    #[serde(default)]
    pub level: CefrLevel,
    #[serde(default)]
    pub length: StoryLength,
    #[serde(default)]
    pub style: StoryStyle,
    #[serde(default)]
    pub theme: StoryTheme,
    #[serde(default)]
    pub superpower: Superpower,
}

impl StoryRequest {
    /// Create a request with defaults for every optional field
    pub fn new(hero_name: impl Into<String>) -> Self {
        Self {
            hero_name: hero_name.into(),
            pet_name: None,
            city: None,
            favorite_color: None,
            level: CefrLevel::default(),
            length: StoryLength::default(),
            style: StoryStyle::default(),
            theme: StoryTheme::default(),
            superpower: Superpower::default(),
        }
    }

    pub fn hero(&self) -> &str {
        self.hero_name.trim()
    }

    pub fn target_word_count(&self) -> u32 {
        self.length.word_count()
    }

    /// The only field-level rule: a hero name must be present
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.hero().is_empty() {
            return Err(DomainError::Validation(
                "Please enter the hero's name".to_string(),
            ));
        }
        Ok(())
    }
}

/// JSON object the provider is instructed to return
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoryPayload {
    pub story: String,
    pub vocab: Vec<String>,
}

/// A generated story as displayed to the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoryResult {
    pub title: String,
    pub text: String,
    pub vocab: Vec<String>,
    pub level: CefrLevel,
}

impl StoryResult {
    /// Build the displayed result. Text and vocabulary come verbatim from the payload.
    pub fn from_payload(request: &StoryRequest, payload: StoryPayload) -> Self {
        Self {
            title: derive_title(request.hero(), request.theme),
            text: payload.story,
            vocab: payload.vocab,
            level: request.level,
        }
    }

    /// Formatted library entry, `"{title} ({level})"`
    pub fn library_title(&self) -> String {
        format!("{} ({})", self.title, self.level.code())
    }
}

pub fn derive_title(hero: &str, theme: StoryTheme) -> String {
    format!("🚀 {}'s {} Adventure", hero, theme.label())
}
