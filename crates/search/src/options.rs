//! Post-processing knobs for interactive searches.

use crate::error::{Result, SearchError};
use crate::property::SearchProperty;
use crate::searcher::{search, SearchResult};
use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use unicode_segmentation::UnicodeSegmentation;

/// Longest query, in characters, an interactive search box forwards.
pub const DEFAULT_MAX_QUERY_LEN: usize = 30;

/// Limits applied around [`search`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Truncate the query to this many characters before matching
    pub max_query_len: Option<usize>,
    /// Drop results whose score is above this threshold
    pub max_score: Option<f64>,
    /// Keep at most this many results
    pub limit: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_query_len: Some(DEFAULT_MAX_QUERY_LEN),
            max_score: None,
            limit: None,
        }
    }
}

impl SearchOptions {
    /// Options that change nothing: full query, every match.
    pub fn unbounded() -> Self {
        Self {
            max_query_len: None,
            max_score: None,
            limit: None,
        }
    }

    /// Set the result limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the score threshold.
    pub fn with_max_score(mut self, max_score: f64) -> Self {
        self.max_score = Some(max_score);
        self
    }

    /// Set the query length cap.
    pub fn with_max_query_len(mut self, max_query_len: usize) -> Self {
        self.max_query_len = Some(max_query_len);
        self
    }

    /// Check the options for values that cannot be applied.
    pub fn validate(&self) -> Result<()> {
        if let Some(max) = self.max_score {
            if !(max.is_finite() && max >= 0.0) {
                return Err(SearchError::InvalidOptions(format!(
                    "max_score must be a finite, non-negative number, got {max}"
                )));
            }
        }
        Ok(())
    }

    /// The query as it will be matched.
    pub fn prepare_query<'a>(&self, query: &'a str) -> Cow<'a, str> {
        match self.max_query_len {
            Some(max) => truncate_query(query, max),
            None => Cow::Borrowed(query),
        }
    }

    /// Apply the threshold and limit to ranked results.
    pub fn apply(&self, results: &mut Vec<SearchResult>) {
        if let Some(max) = self.max_score {
            results.retain(|r| r.score <= max);
        }
        if let Some(limit) = self.limit {
            results.truncate(limit);
        }
    }
}

/// Keep the first `max_chars` user-perceived characters of `query`.
pub fn truncate_query(query: &str, max_chars: usize) -> Cow<'_, str> {
    match query.grapheme_indices(true).nth(max_chars) {
        Some((cut, _)) => Cow::Borrowed(&query[..cut]),
        None => Cow::Borrowed(query),
    }
}

/// [`search`] with [`SearchOptions`] applied.
pub fn search_with_options<I, F, P>(
    query: &str,
    items: &[I],
    properties: F,
    options: &SearchOptions,
) -> Vec<SearchResult>
where
    I: Sync,
    F: Fn(&I) -> P + Sync,
    P: IntoIterator,
    P::Item: Borrow<SearchProperty>,
{
    let query = options.prepare_query(query);
    let mut results = search(&query, items, properties);
    options.apply(&mut results);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::Searchable;

    fn names() -> Vec<&'static str> {
        vec!["Slack", "Slackware", "Discord", "Signal", "Sublime Text"]
    }

    fn run(query: &str, options: &SearchOptions) -> Vec<SearchResult> {
        search_with_options(query, &names(), |n: &&str| n.search_properties(), options)
    }

    #[test]
    fn test_truncate_query() {
        assert_eq!(truncate_query("hello", 3), "hel");
        assert_eq!(truncate_query("hello", 5), "hello");
        assert_eq!(truncate_query("hello", 10), "hello");
        assert_eq!(truncate_query("", 3), "");
        assert_eq!(truncate_query("cafe\u{301}s", 4), "cafe\u{301}");
    }

    #[test]
    fn test_unbounded_matches_plain_search() {
        let items = names();
        let plain = search("s", &items, |n: &&str| n.search_properties());
        assert_eq!(run("s", &SearchOptions::unbounded()), plain);
    }

    #[test]
    fn test_limit() {
        let results = run("s", &SearchOptions::unbounded().with_limit(2));
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].index, 0);
    }

    #[test]
    fn test_max_score() {
        let options = SearchOptions::unbounded().with_max_score(0.05);
        let results = run("sl", &options);
        // Prefix matches only; "Signal" and "Sublime Text" are loose subsequences
        let indices: Vec<usize> = results.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_default_truncates_long_queries() {
        let long = format!("slack{}", "x".repeat(40));
        assert!(run(&long, &SearchOptions::default()).is_empty());

        let options = SearchOptions::default().with_max_query_len(5);
        let results = run(&long, &options);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_validate() {
        assert!(SearchOptions::default().validate().is_ok());
        assert!(SearchOptions::default().with_max_score(0.3).validate().is_ok());
        assert!(SearchOptions::default().with_max_score(-1.0).validate().is_err());
        assert!(SearchOptions::default().with_max_score(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let options: SearchOptions = serde_json::from_str(r#"{"limit": 5}"#).unwrap();
        assert_eq!(options.limit, Some(5));
        assert_eq!(options.max_query_len, Some(DEFAULT_MAX_QUERY_LEN));
        assert_eq!(options.max_score, None);
    }
}
