//! Narrator Port
//!
//! Abstract interface for text-to-speech.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Narration};

/// Text-to-speech provider with a fixed voice and locale
#[async_trait]
pub trait Narrator: Send + Sync {
    /// Synthesize the whole text into one in-memory audio buffer
    async fn narrate(&self, text: &str) -> Result<Narration, DomainError>;

    /// Voice name used for every narration
    fn voice(&self) -> &str;

    fn model_id(&self) -> &str;
}
