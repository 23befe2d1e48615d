//! Story Application Service (Use Case)
//!
//! One user action: validate → generate → narrate → hand back a new session.
//! The incoming session is never modified, so a failed generation leaves the
//! stored session exactly as it was.

use std::sync::Arc;

use magictales::domain::check_premium_options;
use magictales::{
    build_story_prompt, DomainError, Narration, Narrator, Session, StoryGenerator, StoryRequest,
    StoryResult,
};

/// Result of a successful story request
#[derive(Debug)]
pub struct StoryOutcome {
    pub session: Session,
    /// Non-fatal problems (e.g. narration failed) to show next to the story
    pub warnings: Vec<String>,
}

/// Application service for story generation.
///
/// Providers are optional: `None` means the credential was missing at startup.
#[derive(Clone)]
pub struct StoryService {
    generator: Option<Arc<dyn StoryGenerator>>,
    narrator: Option<Arc<dyn Narrator>>,
}

impl StoryService {
    pub fn new(
        generator: Option<Arc<dyn StoryGenerator>>,
        narrator: Option<Arc<dyn Narrator>>,
    ) -> Self {
        Self {
            generator,
            narrator,
        }
    }

    /// Generate a story (and narration) for the session.
    ///
    /// Validation runs before any network call: hero name first, then the
    /// credential, then premium gating of theme and superpower.
    pub async fn request_story(
        &self,
        session: &Session,
        request: StoryRequest,
    ) -> Result<StoryOutcome, DomainError> {
        request.validate()?;

        let generator = self.generator.as_ref().ok_or_else(|| {
            DomainError::MissingCredential(
                "GEMINI_API_KEY is not configured; story generation is disabled".to_string(),
            )
        })?;

        check_premium_options(&request, session.premium)?;

        let prompt = build_story_prompt(&request);
        tracing::info!(
            "Generating story for session {} via {} ({}) - level {}, {} words",
            session.id,
            generator.provider_name(),
            generator.model_id(),
            request.level,
            request.target_word_count()
        );

        let payload = generator.generate(&prompt).await.map_err(|e| {
            tracing::warn!("Story generation failed for session {}: {}", session.id, e);
            e
        })?;

        let story = StoryResult::from_payload(&request, payload);
        let mut warnings = Vec::new();
        let narration = self.narrate(&story, &mut warnings).await;

        tracing::info!(
            "Story '{}' ready ({} vocab, audio: {})",
            story.title,
            story.vocab.len(),
            narration.is_some()
        );

        Ok(StoryOutcome {
            session: session.clone().with_story(story, narration),
            warnings,
        })
    }

    /// Narration failures are downgraded to a warning
    async fn narrate(&self, story: &StoryResult, warnings: &mut Vec<String>) -> Option<Narration> {
        let Some(narrator) = &self.narrator else {
            warnings.push("Narration is disabled".to_string());
            return None;
        };

        match narrator.narrate(&story.text).await {
            Ok(narration) => Some(narration),
            Err(e) => {
                tracing::warn!("⚠️  Narration failed with voice {}: {}", narrator.voice(), e);
                warnings.push(format!("Audio could not be generated: {}", e));
                None
            }
        }
    }
}
