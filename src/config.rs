//! Credential and timeout configuration for pipeline collaborators.
//!
//! Configuration carries values only; each collaborator decides its own
//! mock-vs-real behavior from the presence or absence of its credential,
//! and that decision is observable in the `provider`/`status` fields the
//! collaborator returns.

use std::time::Duration;

/// Default bound on any single provider call.
const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(30);

/// Trend-provider endpoint and credential.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrendsConfig {
    /// Trends API endpoint.
    pub url: Option<String>,
    /// Trends API key.
    pub api_key: Option<String>,
}

impl TrendsConfig {
    /// Returns true when both endpoint and key are present.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.url.is_some() && self.api_key.is_some()
    }
}

/// Per-backend video-generation credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoModelsConfig {
    /// Sora API key.
    pub sora_api_key: Option<String>,
    /// Runway API key.
    pub runway_api_key: Option<String>,
}

/// Narration (text-to-speech) credential.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NarratorConfig {
    /// Narration provider API key.
    pub api_key: Option<String>,
}

/// TikTok publishing credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TikTokConfig {
    /// OAuth access token; absence selects simulated publishing.
    pub access_token: Option<String>,
    /// Application client key.
    pub client_key: Option<String>,
    /// Application client secret.
    pub client_secret: Option<String>,
    /// OAuth redirect URI.
    pub redirect_uri: Option<String>,
}

/// Full configuration surface for the pipeline orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Trend-provider settings.
    pub trends: TrendsConfig,
    /// Video-generation backend settings.
    pub video: VideoModelsConfig,
    /// Narration settings.
    pub narrator: NarratorConfig,
    /// Publishing settings.
    pub tiktok: TikTokConfig,
    /// Bound applied to each provider call; expiry fails the stage.
    pub provider_timeout: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            trends: TrendsConfig::default(),
            video: VideoModelsConfig::default(),
            narrator: NarratorConfig::default(),
            tiktok: TikTokConfig::default(),
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }
}

impl PipelineConfig {
    /// Reads configuration from process environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let provider_timeout = env_opt("PROVIDER_TIMEOUT_SECS")
            .and_then(|raw| raw.parse::<u64>().ok())
            .map_or(DEFAULT_PROVIDER_TIMEOUT, Duration::from_secs);

        Self {
            trends: TrendsConfig {
                url: env_opt("TRENDS_PROVIDER_URL"),
                api_key: env_opt("TRENDS_PROVIDER_API_KEY"),
            },
            video: VideoModelsConfig {
                sora_api_key: env_opt("SORA_API_KEY"),
                runway_api_key: env_opt("RUNWAY_API_KEY"),
            },
            narrator: NarratorConfig {
                api_key: env_opt("NARRATOR_API_KEY"),
            },
            tiktok: TikTokConfig {
                access_token: env_opt("TIKTOK_ACCESS_TOKEN"),
                client_key: env_opt("TIKTOK_CLIENT_KEY"),
                client_secret: env_opt("TIKTOK_CLIENT_SECRET"),
                redirect_uri: env_opt("TIKTOK_REDIRECT_URI"),
            },
            provider_timeout,
        }
    }
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
