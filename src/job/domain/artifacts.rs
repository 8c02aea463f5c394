//! Stage output records attached to jobs and exchanged with providers.

use serde::{Deserialize, Serialize};

/// Candidate trending topic returned by a trend source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendIdea {
    /// Source-assigned candidate identifier.
    pub id: String,
    /// Candidate topic title.
    pub title: String,
    /// Niche the candidate was fetched for.
    pub niche: String,
}

/// Video output attached by the video-generation stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoArtifact {
    /// Backend that produced the video.
    pub provider: String,
    /// Location of the rendered clip.
    pub url: String,
}

/// Narration track attached by the narration stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrationArtifact {
    /// Voice backend that produced the track.
    pub provider: String,
    /// Location of the rendered audio.
    pub url: String,
}

/// Publishing outcome attached by the publish stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishReceipt {
    /// Outcome category reported by the publisher.
    pub status: String,
    /// Human-readable outcome description.
    pub message: String,
    /// Public link to the published clip, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_url: Option<String>,
}
