//! StoryTheme - What the story is about

use serde::{Deserialize, Serialize};

/// Story theme. The free and premium sets are disjoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoryTheme {
    #[default]
    FirstDay,
    Animals,
    NewFriends,
    SchoolAnxiety,
    Courage,
    Sharing,
    Focus,
}

impl StoryTheme {
    /// Themes offered to every user
    pub const FREE: [StoryTheme; 3] = [
        StoryTheme::FirstDay,
        StoryTheme::Animals,
        StoryTheme::NewFriends,
    ];

    /// Themes offered once the premium flag is on
    pub const PREMIUM: [StoryTheme; 4] = [
        StoryTheme::SchoolAnxiety,
        StoryTheme::Courage,
        StoryTheme::Sharing,
        StoryTheme::Focus,
    ];

    pub fn is_premium(&self) -> bool {
        Self::PREMIUM.contains(self)
    }

    pub fn label(&self) -> &'static str {
        match self {
            StoryTheme::FirstDay => "First Day",
            StoryTheme::Animals => "Animals",
            StoryTheme::NewFriends => "New Friends",
            StoryTheme::SchoolAnxiety => "School Anxiety",
            StoryTheme::Courage => "Courage",
            StoryTheme::Sharing => "Sharing",
            StoryTheme::Focus => "Focus",
        }
    }
}

impl std::fmt::Display for StoryTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoryTheme::FirstDay => write!(f, "first_day"),
            StoryTheme::Animals => write!(f, "animals"),
            StoryTheme::NewFriends => write!(f, "new_friends"),
            StoryTheme::SchoolAnxiety => write!(f, "school_anxiety"),
            StoryTheme::Courage => write!(f, "courage"),
            StoryTheme::Sharing => write!(f, "sharing"),
            StoryTheme::Focus => write!(f, "focus"),
        }
    }
}

impl std::str::FromStr for StoryTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "first_day" => Ok(StoryTheme::FirstDay),
            "animals" => Ok(StoryTheme::Animals),
            "new_friends" => Ok(StoryTheme::NewFriends),
            "school_anxiety" => Ok(StoryTheme::SchoolAnxiety),
            "courage" => Ok(StoryTheme::Courage),
            "sharing" => Ok(StoryTheme::Sharing),
            "focus" => Ok(StoryTheme::Focus),
            _ => Err(format!("Unknown story theme: {}", s)),
        }
    }
}
