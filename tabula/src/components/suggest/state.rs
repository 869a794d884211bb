//! Suggestion pipeline status and snapshots.

use std::fmt;

use crate::error::FetchError;

/// Identifier of one issued suggestion fetch.
///
/// Ids are strictly increasing within a pipeline, so comparing ids tells
/// which request is newer regardless of the order responses arrive in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic request id generator, owned by a single pipeline.
#[derive(Debug, Default)]
pub struct RequestIds {
    next: u64,
}

impl RequestIds {
    /// Create a generator starting at id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> RequestId {
        self.next += 1;
        RequestId(self.next)
    }

    /// The most recently issued id, if any.
    pub fn last(&self) -> Option<RequestId> {
        (self.next > 0).then_some(RequestId(self.next))
    }
}

/// Where a suggestion pipeline is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Input is empty; nothing to suggest.
    #[default]
    Idle,
    /// Waiting for typing to settle before fetching.
    Debouncing,
    /// A fetch is in flight.
    Pending,
    /// Results for the latest request are available.
    Ready,
    /// The latest request failed.
    Error,
}

impl Status {
    /// Check if the pipeline is waiting on the timer or the source.
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Debouncing | Self::Pending)
    }
}

/// Everything a view needs to draw the suggestion list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// Current input text.
    pub query: String,
    /// Pipeline status.
    pub status: Status,
    /// Suggestions from the latest accepted response.
    pub results: Vec<String>,
    /// Failure of the latest request, when status is [`Status::Error`].
    pub error: Option<FetchError>,
    /// Id of the latest accepted response.
    pub latest_resolved: Option<RequestId>,
}
