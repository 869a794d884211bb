//! Debounced, race-safe suggestion pipeline.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::FetchError;

use super::config::SuggestConfig;
use super::filter::prefix_filter;
use super::source::CandidateSource;
use super::state::{RequestId, RequestIds, Snapshot, Status};

/// Mutable pipeline state. Never held across an `.await`.
#[derive(Debug, Default)]
struct PipelineInner {
    /// Current input text
    query: String,
    status: Status,
    /// Suggestions from the latest accepted response
    results: Vec<String>,
    error: Option<FetchError>,

    ids: RequestIds,
    /// Latest issued request still allowed to land
    pending: Option<RequestId>,
    latest_resolved: Option<RequestId>,

    /// The armed debounce timer, if any
    timer: Option<JoinHandle<()>>,
    /// Bumped whenever the timer is cancelled, so a timer that already woke
    /// up can tell it was superseded
    epoch: u64,
}

impl PipelineInner {
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            query: self.query.clone(),
            status: self.status,
            results: self.results.clone(),
            error: self.error.clone(),
            latest_resolved: self.latest_resolved,
        }
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.epoch += 1;
    }

    /// Drop results and make any in-flight response stale.
    fn reset(&mut self) {
        self.cancel_timer();
        self.pending = None;
        self.results.clear();
        self.error = None;
        self.status = Status::Idle;
    }

    fn settled_status(&self, status: Status) -> Status {
        if self.timer.is_some() {
            Status::Debouncing
        } else {
            status
        }
    }
}

#[derive(Debug)]
struct Shared<S> {
    source: S,
    config: SuggestConfig,
    state: Mutex<PipelineInner>,
    tx: watch::Sender<Snapshot>,
}

/// Turns a stream of keystrokes into suggestions from a [`CandidateSource`].
///
/// Every keystroke rearms a single debounce timer. Once typing settles, a
/// fetch is issued with a fresh [`RequestId`]. A response is accepted only if
/// its id is still the latest issued one, so a slow response to an older
/// query never overwrites newer results. Clearing the input returns to
/// [`Status::Idle`] immediately and makes in-flight responses stale.
///
/// The pipeline is cheap to clone; clones share the same state.
///
/// # Example
///
/// ```ignore
/// let source = StaticSource::new(["Apple", "Apricot", "Banana"]);
/// let pipeline = SuggestionPipeline::new(source, SuggestConfig::default());
///
/// pipeline.on_input("a");
/// pipeline.on_input("ap");
///
/// let mut updates = pipeline.subscribe();
/// updates.wait_for(|s| s.status == Status::Ready).await?;
/// assert_eq!(pipeline.results(), vec!["Apple", "Apricot"]);
/// ```
#[derive(Debug)]
pub struct SuggestionPipeline<S> {
    shared: Arc<Shared<S>>,
}

impl<S> Clone for SuggestionPipeline<S> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<S: CandidateSource> SuggestionPipeline<S> {
    /// Create an idle pipeline over `source`.
    pub fn new(source: S, config: SuggestConfig) -> Self {
        let (tx, _) = watch::channel(Snapshot::default());
        Self {
            shared: Arc::new(Shared {
                source,
                config,
                state: Mutex::new(PipelineInner::default()),
                tx,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, PipelineInner> {
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, inner: &PipelineInner) {
        self.shared.tx.send_replace(inner.snapshot());
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Feed the current input text. Call on every keystroke.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime, since the debounce timer is
    /// spawned as a task.
    pub fn on_input(&self, text: impl Into<String>) {
        let text = text.into();
        let mut inner = self.lock();

        if text.is_empty() {
            inner.query.clear();
            inner.reset();
            debug!("[suggest] Input cleared");
            self.publish(&inner);
            return;
        }

        inner.cancel_timer();
        inner.query = text;
        inner.error = None;
        inner.status = Status::Debouncing;

        let epoch = inner.epoch;
        let debounce = self.shared.config.debounce;
        let this = self.clone();
        inner.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            this.on_timer(epoch).await;
        }));
        debug!(
            "[suggest] Debounce armed for '{}' ({:?})",
            inner.query, debounce
        );
        self.publish(&inner);
    }

    /// Pick the suggestion at `index`.
    ///
    /// The input becomes the chosen suggestion and the list is hidden. No
    /// fetch is issued for the chosen text. Returns `None` if there is no
    /// suggestion at `index`.
    pub fn select(&self, index: usize) -> Option<String> {
        let mut inner = self.lock();
        let choice = inner.results.get(index).cloned()?;
        inner.reset();
        inner.query = choice.clone();
        debug!("[suggest] Selected '{}'", choice);
        self.publish(&inner);
        Some(choice)
    }

    /// Re-issue the failed fetch immediately, without debouncing.
    ///
    /// Returns `false` if the pipeline is not in [`Status::Error`].
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn retry(&self) -> bool {
        let (id, query) = {
            let mut inner = self.lock();
            if inner.status != Status::Error || inner.query.is_empty() {
                return false;
            }
            self.issue(&mut inner)
        };

        let this = self.clone();
        tokio::spawn(async move {
            this.fetch(id, query).await;
        });
        true
    }

    // -------------------------------------------------------------------------
    // Timer and fetch
    // -------------------------------------------------------------------------

    async fn on_timer(&self, epoch: u64) {
        let (id, query) = {
            let mut inner = self.lock();
            if inner.epoch != epoch {
                return;
            }
            // Past this point the task is the fetch, not the timer, and a
            // later keystroke must not abort it.
            inner.timer = None;
            self.issue(&mut inner)
        };
        self.fetch(id, query).await;
    }

    fn issue(&self, inner: &mut PipelineInner) -> (RequestId, String) {
        let id = inner.ids.next();
        inner.pending = Some(id);
        inner.error = None;
        inner.status = Status::Pending;
        debug!("[suggest] Request {} issued for '{}'", id, inner.query);
        self.publish(inner);
        (id, inner.query.clone())
    }

    async fn fetch(&self, id: RequestId, query: String) {
        let outcome = self.shared.source.fetch_candidates(&query).await;

        let mut inner = self.lock();
        if inner.pending != Some(id) {
            debug!("[suggest] Discarding stale response {} for '{}'", id, query);
            return;
        }
        inner.pending = None;

        match outcome {
            Ok(candidates) => {
                let mut results = prefix_filter(&query, &candidates);
                if let Some(max) = self.shared.config.max_results {
                    results.truncate(max);
                }
                debug!(
                    "[suggest] Request {} resolved with {} suggestions",
                    id,
                    results.len()
                );
                inner.results = results;
                inner.error = None;
                inner.latest_resolved = Some(id);
                inner.status = inner.settled_status(Status::Ready);
            }
            Err(source) => {
                warn!("[suggest] Request {} for '{}' failed: {}", id, query, source);
                inner.results.clear();
                inner.error = Some(FetchError::new(query, source));
                inner.status = inner.settled_status(Status::Error);
            }
        }
        self.publish(&inner);
    }

    // -------------------------------------------------------------------------
    // Observation
    // -------------------------------------------------------------------------

    /// Current input text.
    pub fn query(&self) -> String {
        self.lock().query.clone()
    }

    /// Current status.
    pub fn status(&self) -> Status {
        self.lock().status
    }

    /// Suggestions from the latest accepted response.
    pub fn results(&self) -> Vec<String> {
        self.lock().results.clone()
    }

    /// Failure of the latest request, if it failed.
    pub fn error(&self) -> Option<FetchError> {
        self.lock().error.clone()
    }

    /// Full view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }

    /// Subscribe to state changes. The receiver always holds the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.shared.tx.subscribe()
    }

    /// Pipeline configuration.
    pub fn config(&self) -> &SuggestConfig {
        &self.shared.config
    }

    /// The candidate source.
    pub fn source(&self) -> &S {
        &self.shared.source
    }
}
