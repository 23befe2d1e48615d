//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Story: request fields, provider payload, and the displayed result
//! - Narration: in-memory audio for the current story
//! - Library: saved story titles
//! - Session: everything one user holds for the lifetime of the process

mod library;
mod narration;
mod session;
mod story;

pub use library::*;
pub use narration::*;
pub use session::*;
pub use story::*;
