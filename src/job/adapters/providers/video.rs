//! Video-generation adapters, one per backend identifier.

use async_trait::async_trait;
use uuid::Uuid;

use crate::job::domain::{Script, VideoArtifact};
use crate::job::ports::{ProviderError, ProviderResult, VideoGenerator};

/// Mock backend producing synthetic clip URLs; always available.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockVideoGenerator;

#[async_trait]
impl VideoGenerator for MockVideoGenerator {
    async fn generate(&self, _script: &Script) -> ProviderResult<VideoArtifact> {
        Ok(VideoArtifact {
            provider: "mock".to_owned(),
            url: format!("https://example.com/mock-videos/{}.mp4", Uuid::new_v4()),
        })
    }
}

/// Sora backend; requires an API key.
#[derive(Debug, Clone, Default)]
pub struct SoraVideoGenerator {
    api_key: Option<String>,
}

impl SoraVideoGenerator {
    /// Creates the backend with an optional API key.
    #[must_use]
    pub const fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }
}

#[async_trait]
impl VideoGenerator for SoraVideoGenerator {
    async fn generate(&self, _script: &Script) -> ProviderResult<VideoArtifact> {
        if self.api_key.is_none() {
            return Err(ProviderError::NotConfigured(
                "Sora model not configured – set SORA_API_KEY in .env".to_owned(),
            ));
        }
        // TODO: call the real Sora API once it is publicly available.
        Ok(VideoArtifact {
            provider: "sora".to_owned(),
            url: format!("https://cdn.example.com/videos/{}.mp4", Uuid::new_v4()),
        })
    }
}

/// Runway Gen-2 backend; requires an API key.
#[derive(Debug, Clone, Default)]
pub struct RunwayVideoGenerator {
    api_key: Option<String>,
}

impl RunwayVideoGenerator {
    /// Creates the backend with an optional API key.
    #[must_use]
    pub const fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }
}

#[async_trait]
impl VideoGenerator for RunwayVideoGenerator {
    async fn generate(&self, _script: &Script) -> ProviderResult<VideoArtifact> {
        if self.api_key.is_none() {
            return Err(ProviderError::NotConfigured(
                "Runway model not configured – set RUNWAY_API_KEY in .env".to_owned(),
            ));
        }
        Ok(VideoArtifact {
            provider: "runway".to_owned(),
            url: format!("https://cdn.example.com/videos/{}.mp4", Uuid::new_v4()),
        })
    }
}
