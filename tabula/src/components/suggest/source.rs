//! Candidate sources for the suggestion pipeline.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::SourceError;

/// Supplies candidate labels for a query.
///
/// Sources may return more than the query matches; the pipeline applies its
/// own prefix filter to whatever comes back. Returned order is preserved.
#[async_trait]
pub trait CandidateSource: Send + Sync + 'static {
    /// Fetch candidates for `query`.
    async fn fetch_candidates(&self, query: &str) -> Result<Vec<String>, SourceError>;
}

#[async_trait]
impl<S: CandidateSource + ?Sized> CandidateSource for Arc<S> {
    async fn fetch_candidates(&self, query: &str) -> Result<Vec<String>, SourceError> {
        (**self).fetch_candidates(query).await
    }
}

/// An in-memory candidate list, optionally answering after a delay to
/// stand in for a remote endpoint.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    candidates: Vec<String>,
    latency: Duration,
}

impl StaticSource {
    /// Create a source over `candidates` that answers immediately.
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
            latency: Duration::ZERO,
        }
    }

    /// Answer every fetch after `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// All candidates, in source order.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }
}

#[async_trait]
impl CandidateSource for StaticSource {
    async fn fetch_candidates(&self, _query: &str) -> Result<Vec<String>, SourceError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(self.candidates.clone())
    }
}
