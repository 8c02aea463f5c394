//! Script value objects produced at job-creation time.

use super::JobDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Requested output length for a generated video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthMode {
    /// Length chosen by the pipeline.
    Auto,
    /// Short-form clip.
    Short,
    /// Long-form clip.
    Long,
}

impl LengthMode {
    /// Returns the mode in canonical storage format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Short => "short",
            Self::Long => "long",
        }
    }

    /// Returns the target clip duration in seconds for this mode.
    #[must_use]
    pub const fn target_seconds(self) -> u32 {
        match self {
            Self::Short => 8,
            Self::Long => 20,
            Self::Auto => 12,
        }
    }
}

impl TryFrom<&str> for LengthMode {
    type Error = JobDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "auto" => Ok(Self::Auto),
            "short" => Ok(Self::Short),
            "long" => Ok(Self::Long),
            _ => Err(JobDomainError::InvalidLengthMode(value.to_owned())),
        }
    }
}

impl fmt::Display for LengthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured narration script attached to a job at creation.
///
/// Paragraphs are ordered hook, body, outro. `full_text` is the paragraphs
/// joined by single spaces and doubles as the publish caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    length_mode: LengthMode,
    target_seconds: u32,
    paragraphs: Vec<String>,
    full_text: String,
}

impl Script {
    /// Assembles a script from the three rendered paragraphs.
    #[must_use]
    pub fn from_paragraphs(length_mode: LengthMode, hook: String, body: String, outro: String) -> Self {
        let paragraphs = vec![hook, body, outro];
        let full_text = paragraphs.join(" ");
        Self {
            length_mode,
            target_seconds: length_mode.target_seconds(),
            paragraphs,
            full_text,
        }
    }

    /// Returns the requested length mode.
    #[must_use]
    pub const fn length_mode(&self) -> LengthMode {
        self.length_mode
    }

    /// Returns the target clip duration in seconds.
    #[must_use]
    pub const fn target_seconds(&self) -> u32 {
        self.target_seconds
    }

    /// Returns the ordered script paragraphs.
    #[must_use]
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// Returns the concatenated script text.
    #[must_use]
    pub fn full_text(&self) -> &str {
        &self.full_text
    }
}
