//! Story Generator Port
//!
//! Abstract interface for the hosted text model that writes the story.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, StoryPayload};

/// Text generation provider
///
/// One call, one response: implementations must not retry or stream.
///
/// # Example
///
/// ```rust,ignore
/// use magictales::ports::StoryGenerator;
///
/// struct GeminiStoryGenerator { /* ... */ }
///
/// #[async_trait]
/// impl StoryGenerator for GeminiStoryGenerator {
///     async fn generate(&self, prompt: &str) -> Result<StoryPayload, DomainError> {
///         // POST generateContent, parse candidates[0] text as JSON
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait StoryGenerator: Send + Sync {
    /// Send the prompt and parse the `{story, vocab}` object out of the reply
    async fn generate(&self, prompt: &str) -> Result<StoryPayload, DomainError>;

    /// Get the provider name (e.g., "google")
    fn provider_name(&self) -> &str;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
