//! Prefix filtering using nucleo-matcher.

use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// Case-insensitive prefix matcher for a single query.
///
/// Reuses one matcher and scratch buffers across candidates.
pub struct PrefixMatcher {
    query: String,
    atom: Atom,
    matcher: Matcher,
    buf: Vec<char>,
    indices: Vec<u32>,
}

impl PrefixMatcher {
    /// Create a matcher for `query`.
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            atom: Atom::new(
                query,
                CaseMatching::Ignore,
                Normalization::Never,
                AtomKind::Prefix,
                false,
            ),
            matcher: Matcher::new(Config::DEFAULT),
            buf: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Number of leading characters of `label` matched by the query, if it
    /// matches at all.
    ///
    /// The match must start at the first character; nucleo's prefix atoms
    /// otherwise skip leading whitespace in the haystack.
    pub fn matched_chars(&mut self, label: &str) -> Option<usize> {
        if self.query.is_empty() {
            return Some(0);
        }

        self.indices.clear();
        let haystack = Utf32Str::new(label, &mut self.buf);
        self.atom
            .indices(haystack, &mut self.matcher, &mut self.indices)?;

        match (self.indices.first(), self.indices.last()) {
            (Some(0), Some(&last)) => Some(last as usize + 1),
            _ => None,
        }
    }

    /// Whether `label` should be suggested for the query.
    ///
    /// A label identical to the query is not suggested back.
    pub fn accepts(&mut self, label: &str) -> bool {
        label != self.query && self.matched_chars(label).is_some()
    }
}

/// Filter `candidates` down to the suggestions for `query`.
///
/// Keeps candidates whose start matches `query` ignoring case, drops a
/// candidate exactly equal to `query`, and preserves source order.
///
/// # Example
///
/// ```
/// use tabula::components::suggest::prefix_filter;
///
/// let fruits = vec!["Apple".to_string(), "Apricot".to_string(), "Banana".to_string()];
/// assert_eq!(prefix_filter("ap", &fruits), vec!["Apple", "Apricot"]);
/// ```
pub fn prefix_filter(query: &str, candidates: &[String]) -> Vec<String> {
    let mut matcher = PrefixMatcher::new(query);
    let matches: Vec<String> = candidates
        .iter()
        .filter(|label| matcher.accepts(label))
        .cloned()
        .collect();
    log::trace!(
        "[suggest] '{}' matched {} of {} candidates",
        query,
        matches.len(),
        candidates.len()
    );
    matches
}

/// Split `label` into the part matched by `query` and the remainder.
///
/// Returns `None` if `label` does not start with `query` (ignoring case).
/// Views use this to emphasise the typed prefix.
pub fn highlight<'a>(query: &str, label: &'a str) -> Option<(&'a str, &'a str)> {
    let chars = PrefixMatcher::new(query).matched_chars(label)?;
    let split = label
        .char_indices()
        .nth(chars)
        .map(|(offset, _)| offset)
        .unwrap_or(label.len());
    Some(label.split_at(split))
}
