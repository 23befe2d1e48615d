//! StoryLength - Reading time presets

use serde::{Deserialize, Serialize};

/// Reading time preset; each maps to a target word count
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum StoryLength {
    #[default]
    #[serde(rename = "3min")]
    ThreeMinutes,
    #[serde(rename = "5min")]
    FiveMinutes,
    #[serde(rename = "8min")]
    EightMinutes,
    #[serde(rename = "12min")]
    TwelveMinutes,
}

impl StoryLength {
    pub const ALL: [StoryLength; 4] = [
        StoryLength::ThreeMinutes,
        StoryLength::FiveMinutes,
        StoryLength::EightMinutes,
        StoryLength::TwelveMinutes,
    ];

    pub fn minutes(&self) -> u32 {
        match self {
            StoryLength::ThreeMinutes => 3,
            StoryLength::FiveMinutes => 5,
            StoryLength::EightMinutes => 8,
            StoryLength::TwelveMinutes => 12,
        }
    }

    /// Target word count handed to the prompt
    pub fn word_count(&self) -> u32 {
        self.minutes() * 100
    }

    pub fn label(&self) -> String {
        format!("{} minutes ({} words)", self.minutes(), self.word_count())
    }
}

impl std::fmt::Display for StoryLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}min", self.minutes())
    }
}

impl std::str::FromStr for StoryLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_lowercase();
        let minutes = trimmed
            .trim_end_matches("minutes")
            .trim_end_matches("min")
            .trim();
        match minutes {
            "3" => Ok(StoryLength::ThreeMinutes),
            "5" => Ok(StoryLength::FiveMinutes),
            "8" => Ok(StoryLength::EightMinutes),
            "12" => Ok(StoryLength::TwelveMinutes),
            _ => Err(format!("Unknown story length: {}", s)),
        }
    }
}
