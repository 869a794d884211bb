//! Tests for the debounced suggestion pipeline.
//!
//! All tests run on a paused clock, so sleeps advance virtual time
//! deterministically.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tabula::components::suggest::{
    CandidateSource, StaticSource, Status, SuggestConfig, SuggestionPipeline,
};
use tabula::error::SourceError;
use tokio::time::sleep;

const DEBOUNCE: Duration = Duration::from_millis(100);

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Candidate source with per-query latency, scripted failures and a call log.
#[derive(Clone, Default)]
struct ScriptedSource {
    candidates: Vec<String>,
    delays: HashMap<String, Duration>,
    failing: Arc<Mutex<HashSet<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedSource {
    fn new(candidates: &[&str]) -> Self {
        Self {
            candidates: candidates.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    fn set_failing(&self, query: &str, failing: bool) {
        let mut set = self.failing.lock().unwrap();
        if failing {
            set.insert(query.to_string());
        } else {
            set.remove(query);
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CandidateSource for ScriptedSource {
    async fn fetch_candidates(&self, query: &str) -> Result<Vec<String>, SourceError> {
        self.calls.lock().unwrap().push(query.to_string());
        if let Some(delay) = self.delays.get(query) {
            sleep(*delay).await;
        }
        if self.failing.lock().unwrap().contains(query) {
            return Err(SourceError::new("service unavailable"));
        }
        Ok(self.candidates.clone())
    }
}

fn new_pipeline(source: &ScriptedSource) -> SuggestionPipeline<ScriptedSource> {
    SuggestionPipeline::new(
        source.clone(),
        SuggestConfig::default().with_debounce(DEBOUNCE),
    )
}

const FRUITS: &[&str] = &["Apple", "Application", "Apricot", "Banana", "Kiwi", "Kiwano"];

#[tokio::test(start_paused = true)]
async fn test_fruit_scenario() {
    let source = ScriptedSource::new(&["Apple", "Apricot", "Banana"]);
    let pipeline = new_pipeline(&source);

    pipeline.on_input("ap");
    assert_eq!(pipeline.status(), Status::Debouncing);
    sleep(ms(500)).await;

    assert_eq!(pipeline.status(), Status::Ready);
    assert_eq!(pipeline.results(), vec!["Apple", "Apricot"]);
}

#[tokio::test(start_paused = true)]
async fn test_keystrokes_within_debounce_issue_one_fetch() {
    let source = ScriptedSource::new(FRUITS);
    let pipeline = new_pipeline(&source);

    pipeline.on_input("a");
    sleep(ms(30)).await;
    pipeline.on_input("ap");
    sleep(ms(30)).await;
    pipeline.on_input("app");
    assert_eq!(pipeline.status(), Status::Debouncing);
    assert!(source.calls().is_empty());

    sleep(ms(500)).await;
    assert_eq!(source.calls(), vec!["app"]);
    assert_eq!(pipeline.results(), vec!["Apple", "Application"]);
}

#[tokio::test(start_paused = true)]
async fn test_settled_keystrokes_each_fetch() {
    let source = ScriptedSource::new(FRUITS);
    let pipeline = new_pipeline(&source);

    pipeline.on_input("a");
    sleep(ms(150)).await;
    pipeline.on_input("ap");
    sleep(ms(150)).await;
    assert_eq!(source.calls(), vec!["a", "ap"]);
}

#[tokio::test(start_paused = true)]
async fn test_stale_response_never_overwrites_newer_results() {
    let source = ScriptedSource::new(FRUITS)
        .with_delay("ap", ms(500))
        .with_delay("app", ms(10));
    let pipeline = new_pipeline(&source);

    // "ap" is issued at 100ms and resolves at 600ms
    pipeline.on_input("ap");
    sleep(ms(150)).await;
    assert_eq!(pipeline.status(), Status::Pending);

    // "app" is issued at 250ms and resolves at 260ms
    pipeline.on_input("app");
    sleep(ms(200)).await;
    assert_eq!(pipeline.status(), Status::Ready);
    assert_eq!(pipeline.results(), vec!["Apple", "Application"]);
    let resolved = pipeline.snapshot().latest_resolved;

    sleep(ms(1000)).await;
    assert_eq!(source.calls(), vec!["ap", "app"]);
    assert_eq!(pipeline.status(), Status::Ready);
    assert_eq!(pipeline.results(), vec!["Apple", "Application"]);
    assert_eq!(pipeline.snapshot().latest_resolved, resolved);
}

#[tokio::test(start_paused = true)]
async fn test_response_landing_while_debouncing_keeps_debouncing() {
    let source = ScriptedSource::new(FRUITS).with_delay("ap", ms(20));
    let pipeline = new_pipeline(&source);

    pipeline.on_input("ap");
    sleep(ms(110)).await;
    pipeline.on_input("apr");

    // "ap" lands at 120ms, while the "apr" timer is armed
    sleep(ms(20)).await;
    assert_eq!(pipeline.status(), Status::Debouncing);
    assert_eq!(pipeline.results(), vec!["Apple", "Application", "Apricot"]);

    sleep(ms(200)).await;
    assert_eq!(pipeline.status(), Status::Ready);
    assert_eq!(pipeline.results(), vec!["Apricot"]);
}

#[tokio::test(start_paused = true)]
async fn test_empty_input_resets_immediately() {
    let source = ScriptedSource::new(FRUITS).with_delay("ap", ms(500));
    let pipeline = new_pipeline(&source);

    pipeline.on_input("ap");
    sleep(ms(150)).await;
    assert_eq!(pipeline.status(), Status::Pending);

    pipeline.on_input("");
    assert_eq!(pipeline.status(), Status::Idle);
    assert!(pipeline.results().is_empty());

    // The in-flight "ap" response is stale once it lands
    sleep(ms(1000)).await;
    assert_eq!(pipeline.status(), Status::Idle);
    assert!(pipeline.results().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_empty_input_cancels_debounce() {
    let source = ScriptedSource::new(FRUITS);
    let pipeline = new_pipeline(&source);

    pipeline.on_input("ap");
    sleep(ms(50)).await;
    pipeline.on_input("");
    sleep(ms(500)).await;

    assert!(source.calls().is_empty());
    assert_eq!(pipeline.status(), Status::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_empty_input_from_ready() {
    let source = ScriptedSource::new(FRUITS);
    let pipeline = new_pipeline(&source);

    pipeline.on_input("ki");
    sleep(ms(500)).await;
    assert_eq!(pipeline.results(), vec!["Kiwi", "Kiwano"]);

    pipeline.on_input("");
    let snapshot = pipeline.snapshot();
    assert_eq!(snapshot.status, Status::Idle);
    assert!(snapshot.results.is_empty());
    assert_eq!(snapshot.query, "");
}

#[tokio::test(start_paused = true)]
async fn test_fetch_error_keeps_query_and_retry_recovers() {
    let source = ScriptedSource::new(FRUITS);
    source.set_failing("ki", true);
    let pipeline = new_pipeline(&source);

    pipeline.on_input("ki");
    sleep(ms(500)).await;

    assert_eq!(pipeline.status(), Status::Error);
    assert!(pipeline.results().is_empty());
    let error = pipeline.error().unwrap();
    assert_eq!(error.query, "ki");
    assert_eq!(error.source, SourceError::new("service unavailable"));

    source.set_failing("ki", false);
    assert!(pipeline.retry());
    assert_eq!(pipeline.status(), Status::Pending);
    sleep(ms(10)).await;

    assert_eq!(pipeline.status(), Status::Ready);
    assert_eq!(pipeline.results(), vec!["Kiwi", "Kiwano"]);
    assert!(pipeline.error().is_none());
    assert_eq!(source.calls(), vec!["ki", "ki"]);
}

#[tokio::test(start_paused = true)]
async fn test_error_is_rearmed_by_next_input() {
    let source = ScriptedSource::new(FRUITS);
    source.set_failing("ki", true);
    let pipeline = new_pipeline(&source);

    pipeline.on_input("ki");
    sleep(ms(500)).await;
    assert_eq!(pipeline.status(), Status::Error);

    pipeline.on_input("kiw");
    assert_eq!(pipeline.status(), Status::Debouncing);
    assert!(pipeline.error().is_none());

    sleep(ms(500)).await;
    assert_eq!(pipeline.status(), Status::Ready);
    assert_eq!(pipeline.results(), vec!["Kiwi", "Kiwano"]);
}

#[tokio::test(start_paused = true)]
async fn test_retry_outside_error_is_noop() {
    let source = ScriptedSource::new(FRUITS);
    let pipeline = new_pipeline(&source);
    assert!(!pipeline.retry());

    pipeline.on_input("ap");
    sleep(ms(500)).await;
    assert!(!pipeline.retry());
    assert_eq!(pipeline.source().calls(), vec!["ap"]);
}

#[tokio::test(start_paused = true)]
async fn test_select_hides_list_without_fetching() {
    let source = ScriptedSource::new(FRUITS);
    let pipeline = new_pipeline(&source);

    pipeline.on_input("apr");
    sleep(ms(500)).await;
    assert_eq!(pipeline.results(), vec!["Apricot"]);

    assert_eq!(pipeline.select(3), None);
    assert_eq!(pipeline.select(0), Some("Apricot".to_string()));
    assert_eq!(pipeline.query(), "Apricot");
    assert_eq!(pipeline.status(), Status::Idle);
    assert!(pipeline.results().is_empty());

    sleep(ms(500)).await;
    assert_eq!(source.calls(), vec!["apr"]);
}

#[tokio::test(start_paused = true)]
async fn test_max_results_truncates() {
    let source = ScriptedSource::new(FRUITS);
    let pipeline = SuggestionPipeline::new(
        source.clone(),
        SuggestConfig::default()
            .with_debounce(DEBOUNCE)
            .with_max_results(2),
    );

    pipeline.on_input("a");
    sleep(ms(500)).await;
    assert_eq!(pipeline.results(), vec!["Apple", "Application"]);
}

#[tokio::test(start_paused = true)]
async fn test_subscribers_see_latest_snapshot() {
    let source = ScriptedSource::new(FRUITS);
    let pipeline = new_pipeline(&source);
    let mut updates = pipeline.subscribe();

    pipeline.on_input("ban");
    let snapshot = updates
        .wait_for(|s| s.status == Status::Ready)
        .await
        .unwrap()
        .clone();

    assert_eq!(snapshot.query, "ban");
    assert_eq!(snapshot.results, vec!["Banana"]);
    assert!(snapshot.latest_resolved.is_some());
}

#[tokio::test(start_paused = true)]
async fn test_static_source_latency() {
    let source = StaticSource::new(["Apple", "Apricot", "Banana"]).with_latency(ms(1000));
    assert_eq!(source.candidates(), ["Apple", "Apricot", "Banana"]);
    let pipeline = SuggestionPipeline::new(source, SuggestConfig::immediate());

    pipeline.on_input("b");
    sleep(ms(500)).await;
    assert_eq!(pipeline.status(), Status::Pending);

    sleep(ms(1000)).await;
    assert_eq!(pipeline.status(), Status::Ready);
    assert_eq!(pipeline.results(), vec!["Banana"]);
}
