//! Video-generation backend identifiers.

use super::JobDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported video-generation backends.
///
/// The identifier selects an entry in the video-generator lookup registry;
/// whether the backend actually has usable credentials is decided by the
/// generator itself at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoProviderId {
    /// Built-in mock backend, always available.
    Mock,
    /// OpenAI Sora.
    Sora,
    /// Runway Gen-2.
    Runway,
}

impl VideoProviderId {
    /// Returns the identifier in canonical storage format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Sora => "sora",
            Self::Runway => "runway",
        }
    }
}

impl TryFrom<&str> for VideoProviderId {
    type Error = JobDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "mock" => Ok(Self::Mock),
            "sora" => Ok(Self::Sora),
            "runway" => Ok(Self::Runway),
            _ => Err(JobDomainError::InvalidVideoProvider(value.to_owned())),
        }
    }
}

impl fmt::Display for VideoProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
