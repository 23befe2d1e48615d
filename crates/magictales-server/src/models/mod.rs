//! MagicTales API Models
//!
//! - Session: sidebar state and premium toggle
//! - Story: request form and generated story
//! - Library: saved titles
//! - Screens: Home, Story Request, Hot Stories and Tool tabs

mod library;
mod screens;
mod session;
mod story;

pub use library::*;
pub use screens::*;
pub use session::*;
pub use story::*;
