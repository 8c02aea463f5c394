//! Publishing adapter.

use async_trait::async_trait;

use crate::job::domain::PublishReceipt;
use crate::job::ports::{ProviderResult, Publisher};

/// TikTok publisher stub.
///
/// Without an access token it simulates success; with one it reports that
/// the real Content API integration is still pending.
#[derive(Debug, Clone, Default)]
pub struct TikTokPublisher {
    access_token: Option<String>,
}

impl TikTokPublisher {
    /// Creates the publisher with an optional access token.
    #[must_use]
    pub const fn new(access_token: Option<String>) -> Self {
        Self { access_token }
    }
}

#[async_trait]
impl Publisher for TikTokPublisher {
    async fn publish(
        &self,
        _video_url: &str,
        _caption: &str,
        _channel: &str,
    ) -> ProviderResult<PublishReceipt> {
        if self.access_token.is_none() {
            return Ok(PublishReceipt {
                status: "simulated".to_owned(),
                message: "TikTok publishing simulated – set TIKTOK_ACCESS_TOKEN in .env for real \
                          integration."
                    .to_owned(),
                share_url: Some("https://www.tiktok.com/@your-channel/video/1234567890".to_owned()),
            });
        }
        Ok(PublishReceipt {
            status: "pending-implementation".to_owned(),
            message: "Real TikTok API call not yet implemented.".to_owned(),
            share_url: None,
        })
    }
}
