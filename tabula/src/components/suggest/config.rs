//! Suggestion pipeline configuration

use std::time::Duration;

/// Configuration for a suggestion pipeline.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use tabula::components::suggest::SuggestConfig;
///
/// let config = SuggestConfig::default()
///     .with_debounce(Duration::from_millis(500))
///     .with_max_results(10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestConfig {
    /// Quiet period after the last keystroke before a fetch is issued.
    ///
    /// Default: 200 milliseconds
    pub debounce: Duration,

    /// Maximum number of suggestions kept after filtering (None = unlimited).
    ///
    /// Default: unlimited
    pub max_results: Option<usize>,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(200),
            max_results: None,
        }
    }
}

impl SuggestConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the debounce duration.
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Sets the maximum number of suggestions.
    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = Some(max);
        self
    }

    /// Creates a config that fetches as soon as input arrives (zero debounce).
    pub fn immediate() -> Self {
        Self {
            debounce: Duration::ZERO,
            ..Default::default()
        }
    }
}
