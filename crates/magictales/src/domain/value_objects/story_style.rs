//! StoryStyle - Narrative tone

use serde::{Deserialize, Serialize};

/// Narrative tone of the story
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoryStyle {
    #[default]
    Warm,
    Adventure,
    Funny,
}

impl StoryStyle {
    pub const ALL: [StoryStyle; 3] = [StoryStyle::Warm, StoryStyle::Adventure, StoryStyle::Funny];

    pub fn label(&self) -> &'static str {
        match self {
            StoryStyle::Warm => "Warm",
            StoryStyle::Adventure => "Adventure",
            StoryStyle::Funny => "Funny",
        }
    }
}

impl std::fmt::Display for StoryStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoryStyle::Warm => write!(f, "warm"),
            StoryStyle::Adventure => write!(f, "adventure"),
            StoryStyle::Funny => write!(f, "funny"),
        }
    }
}

impl std::str::FromStr for StoryStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "warm" => Ok(StoryStyle::Warm),
            "adventure" => Ok(StoryStyle::Adventure),
            "funny" => Ok(StoryStyle::Funny),
            _ => Err(format!("Unknown story style: {}", s)),
        }
    }
}
