//! MagicTales Domain Library
//!
//! Core domain types and interfaces for the MagicTales story generator.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Story requests and results, narration, library, session
//!   - `value_objects/`: Enumerated option sets (CEFR level, length, style, theme, superpower)
//!   - `services/`: Prompt builder and premium-gated option catalog
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Session storage
//!   - `services/`: Story generation and narration providers
//!
//! # Usage
//!
//! ```rust,ignore
//! use magictales::domain::{Session, StoryRequest};
//! use magictales::ports::{StoryGenerator, Narrator};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    build_story_prompt, CefrLevel, CurrentStory, DomainError, Library, LibraryEntry, Narration,
    OptionCatalog, Session, StoryLength, StoryPayload, StoryRequest, StoryResult, StoryStyle,
    StoryTheme, Superpower,
};
pub use ports::{Narrator, SessionRepository, StoryGenerator};
