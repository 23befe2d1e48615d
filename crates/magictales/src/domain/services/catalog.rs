//! Option Catalog
//!
//! The enumerated option sets offered on the story request screen. Theme and
//! superpower sets depend on the premium flag.

use serde::Serialize;

use crate::domain::entities::StoryRequest;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{CefrLevel, StoryLength, StoryStyle, StoryTheme, Superpower};

/// Themes offered for the given premium state
pub fn themes_for(premium: bool) -> &'static [StoryTheme] {
    if premium {
        &StoryTheme::PREMIUM
    } else {
        &StoryTheme::FREE
    }
}

/// Superpowers offered for the given premium state
pub fn superpowers_for(premium: bool) -> &'static [Superpower] {
    if premium {
        &Superpower::ALL
    } else {
        &Superpower::ALL[..1]
    }
}

/// Reject theme or superpower choices that the premium state does not offer
pub fn check_premium_options(request: &StoryRequest, premium: bool) -> Result<(), DomainError> {
    if !themes_for(premium).contains(&request.theme) {
        return Err(DomainError::Validation(format!(
            "Theme '{}' is not available {}",
            request.theme.label(),
            if premium {
                "to premium members"
            } else {
                "without premium"
            }
        )));
    }
    if !superpowers_for(premium).contains(&request.superpower) {
        return Err(DomainError::Validation(format!(
            "Superpower '{}' requires premium",
            request.superpower.label()
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LevelOption {
    pub level: CefrLevel,
    pub label: &'static str,
    pub hint: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LengthOption {
    pub length: StoryLength,
    pub label: String,
    pub word_count: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Choice<T> {
    pub value: T,
    pub label: &'static str,
}

/// Everything the request screen offers for one premium state
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OptionCatalog {
    pub premium: bool,
    pub levels: Vec<LevelOption>,
    pub lengths: Vec<LengthOption>,
    pub styles: Vec<Choice<StoryStyle>>,
    pub themes: Vec<Choice<StoryTheme>>,
    pub superpowers: Vec<Choice<Superpower>>,
    pub superpower_locked: bool,
}

impl OptionCatalog {
    pub fn for_premium(premium: bool) -> Self {
        Self {
            premium,
            levels: CefrLevel::ALL
                .iter()
                .map(|&level| LevelOption {
                    level,
                    label: level.label(),
                    hint: level.hint(),
                })
                .collect(),
            lengths: StoryLength::ALL
                .iter()
                .map(|&length| LengthOption {
                    length,
                    label: length.label(),
                    word_count: length.word_count(),
                })
                .collect(),
            styles: StoryStyle::ALL
                .iter()
                .map(|&value| Choice {
                    value,
                    label: value.label(),
                })
                .collect(),
            themes: themes_for(premium)
                .iter()
                .map(|&value| Choice {
                    value,
                    label: value.label(),
                })
                .collect(),
            superpowers: superpowers_for(premium)
                .iter()
                .map(|&value| Choice {
                    value,
                    label: value.label(),
                })
                .collect(),
            superpower_locked: !premium,
        }
    }
}
