//! Narration - In-memory audio for the current story

/// Synthesized audio. Never cached or persisted; regenerated per story.
#[derive(Clone, PartialEq, Eq)]
pub struct Narration {
    pub audio: Vec<u8>,
    pub mime_type: String,
}

impl Narration {
    pub fn new(audio: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            audio,
            mime_type: mime_type.into(),
        }
    }

    pub fn wav(audio: Vec<u8>) -> Self {
        Self::new(audio, "audio/wav")
    }

    pub fn len(&self) -> usize {
        self.audio.len()
    }

    pub fn is_empty(&self) -> bool {
        self.audio.is_empty()
    }
}

impl std::fmt::Debug for Narration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Narration")
            .field("mime_type", &self.mime_type)
            .field("bytes", &self.audio.len())
            .finish()
    }
}
