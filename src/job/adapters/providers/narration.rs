//! Narration-generation adapter.

use async_trait::async_trait;

use crate::job::domain::{NarrationArtifact, Script};
use crate::job::ports::{NarrationGenerator, ProviderResult};

/// Narration generator switching between mock and external-stub voices.
///
/// Without a key it returns the development mock track; with one it
/// returns the external-voice stub (the real TTS call is an external
/// collaborator). It never fails either way.
#[derive(Debug, Clone, Default)]
pub struct StubNarrationGenerator {
    api_key: Option<String>,
}

impl StubNarrationGenerator {
    /// Creates the generator with an optional TTS API key.
    #[must_use]
    pub const fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }
}

#[async_trait]
impl NarrationGenerator for StubNarrationGenerator {
    async fn generate(&self, _script: &Script) -> ProviderResult<NarrationArtifact> {
        if self.api_key.is_none() {
            return Ok(NarrationArtifact {
                provider: "mock-voice".to_owned(),
                url: "https://example.com/mock-audio/narration.mp3".to_owned(),
            });
        }
        Ok(NarrationArtifact {
            provider: "external-voice".to_owned(),
            url: "https://example.com/external-voice/narration.mp3".to_owned(),
        })
    }
}
