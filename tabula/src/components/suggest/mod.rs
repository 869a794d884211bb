//! Suggest component - a debounced typeahead pipeline.
//!
//! The Suggest component provides:
//! - A single debounce timer, rearmed on every keystroke
//! - Request ids so late responses to superseded queries are discarded
//! - Case-insensitive prefix filtering that never echoes the typed text back
//! - Status and results snapshots, pushed to subscribers over a watch channel
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use tabula::prelude::*;
//!
//! let source = StaticSource::new(FRUITS).with_latency(Duration::from_secs(1));
//! let pipeline = SuggestionPipeline::new(source, SuggestConfig::default());
//!
//! let mut updates = pipeline.subscribe();
//! pipeline.on_input("ap");
//! let snapshot = updates.wait_for(|s| !s.status.is_busy()).await?.clone();
//! ```

mod config;
mod filter;
mod pipeline;
mod source;
mod state;

pub use config::SuggestConfig;
pub use filter::{highlight, prefix_filter, PrefixMatcher};
pub use pipeline::SuggestionPipeline;
pub use source::{CandidateSource, StaticSource};
pub use state::{RequestId, RequestIds, Snapshot, Status};
