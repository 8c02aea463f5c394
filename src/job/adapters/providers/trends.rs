//! Trend-source adapters.
//!
//! Trend lookup is fail-soft by design: job creation must never block on a
//! trend-provider outage, so failures map to a fixed fallback candidate
//! list instead of propagating.

use async_trait::async_trait;
use tracing::warn;

use crate::job::domain::TrendIdea;
use crate::job::ports::{ProviderError, ProviderResult, TrendSource};

/// Development trend source with a fixed candidate list.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTrendSource;

#[async_trait]
impl TrendSource for StaticTrendSource {
    async fn fetch(&self, niche: &str) -> ProviderResult<Vec<TrendIdea>> {
        Ok(vec![
            TrendIdea {
                id: "mock-1".to_owned(),
                title: "AI transforms my daily routine".to_owned(),
                niche: niche.to_owned(),
            },
            TrendIdea {
                id: "mock-2".to_owned(),
                title: "Before vs After using AI tools".to_owned(),
                niche: niche.to_owned(),
            },
            TrendIdea {
                id: "mock-3".to_owned(),
                title: "This AI video changed my mind".to_owned(),
                niche: niche.to_owned(),
            },
        ])
    }
}

/// Placeholder for the real trends API client.
///
/// The HTTP integration lives outside this crate; until it is wired in,
/// configured deployments hit this stub, whose failure the fallback
/// decorator absorbs.
#[derive(Debug, Clone, Default)]
pub struct ExternalTrendSource {
    url: String,
}

impl ExternalTrendSource {
    /// Creates a stub client for the configured endpoint.
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }
}

#[async_trait]
impl TrendSource for ExternalTrendSource {
    async fn fetch(&self, _niche: &str) -> ProviderResult<Vec<TrendIdea>> {
        Err(ProviderError::Upstream(format!(
            "trends API client for {} not implemented",
            self.url
        )))
    }
}

/// Decorator mapping any inner failure to a fixed fallback list.
#[derive(Debug, Clone, Default)]
pub struct FallbackTrendSource<S> {
    inner: S,
}

impl<S> FallbackTrendSource<S> {
    /// Wraps an inner trend source.
    #[must_use]
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S: TrendSource> TrendSource for FallbackTrendSource<S> {
    async fn fetch(&self, niche: &str) -> ProviderResult<Vec<TrendIdea>> {
        match self.inner.fetch(niche).await {
            Ok(ideas) => Ok(ideas),
            Err(err) => {
                warn!("trend lookup failed, using fallback ideas: {err}");
                Ok(vec![
                    TrendIdea {
                        id: "fallback-1".to_owned(),
                        title: "AI vs Human challenge".to_owned(),
                        niche: niche.to_owned(),
                    },
                    TrendIdea {
                        id: "fallback-2".to_owned(),
                        title: "I let AI control my day".to_owned(),
                        niche: niche.to_owned(),
                    },
                ])
            }
        }
    }
}
