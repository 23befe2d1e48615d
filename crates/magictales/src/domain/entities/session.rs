//! Session - Per-user state for the lifetime of the process
//!
//! Sessions are values: the controller takes one in and hands a new one
//! back, and the repository stores whatever it is given.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{Library, LibraryEntry, Narration, StoryResult};
use crate::domain::errors::DomainError;

/// Coin balance every session starts with (display only)
pub const INITIAL_COINS: u32 = 100;

/// Last generated story and its narration, if synthesis succeeded
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentStory {
    pub story: StoryResult,
    pub narration: Option<Narration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: Uuid,
    pub premium: bool,
    pub coins: u32,
    pub library: Library,
    pub current: Option<CurrentStory>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            premium: false,
            coins: INITIAL_COINS,
            library: Library::new(),
            current: None,
            created_at: Utc::now(),
        }
    }

    /// Toggle the premium flag; the current story is left as it is
    pub fn with_premium(self, premium: bool) -> Self {
        Self { premium, ..self }
    }

    /// Replace the current story (and its narration)
    pub fn with_story(self, story: StoryResult, narration: Option<Narration>) -> Self {
        Self {
            current: Some(CurrentStory { story, narration }),
            ..self
        }
    }

    pub fn current_story(&self) -> Option<&StoryResult> {
        self.current.as_ref().map(|c| &c.story)
    }

    pub fn current_narration(&self) -> Option<&Narration> {
        self.current.as_ref().and_then(|c| c.narration.as_ref())
    }

    /// Save the current story's title to the library.
    ///
    /// Returns the new session and whether an entry was added.
    pub fn save_current_to_library(self) -> Result<(Self, bool), DomainError> {
        let entry = self
            .current_story()
            .map(|story| LibraryEntry::new(story.library_title()))
            .ok_or_else(|| DomainError::Validation("No story to save yet".to_string()))?;

        let mut library = self.library.clone();
        let added = library.save(entry);
        Ok((Self { library, ..self }, added))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
