//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod document_db;
pub mod gemini;
pub mod memory;

// Re-exports
pub use document_db::DocumentDb;
pub use gemini::{GeminiNarrator, GeminiStoryGenerator};
pub use memory::InMemorySessionRepository;
