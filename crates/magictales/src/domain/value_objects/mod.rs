//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.
//! Each one is a fixed, enumerated option set offered on the story request screen.

mod cefr_level;
mod story_length;
mod story_style;
mod story_theme;
mod superpower;

pub use cefr_level::*;
pub use story_length::*;
pub use story_style::*;
pub use story_theme::*;
pub use superpower::*;
