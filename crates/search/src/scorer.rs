//! Match cost between a query and a single piece of text.
//!
//! Costs live in `[0, 1]`, 0 being a perfect match, with [`NO_MATCH`]
//! (positive infinity) standing for "does not match at all". The first rule
//! that applies decides the cost:
//!
//! | tier        | cost                                  |
//! |-------------|---------------------------------------|
//! | empty query | `0`                                   |
//! | exact       | `0`                                   |
//! | prefix      | `0.01`                                |
//! | substring   | `0.02 ..= 0.10`, better with coverage |
//! | subsequence | `0.01 ..= 1.0`, see [`crate::fuzzy`]  |

use crate::fuzzy::{graphemes, subsequence_match, SubsequenceBreakdown};
use serde::Serialize;

/// Cost reported when the query cannot be matched.
pub const NO_MATCH: f64 = f64::INFINITY;
/// Cost of a text that starts with the query.
pub const PREFIX_COST: f64 = 0.01;
/// Lowest cost of a non-prefix substring match.
pub const SUBSTRING_BASE_COST: f64 = 0.02;
/// Range added on top of [`SUBSTRING_BASE_COST`] as coverage drops to zero.
pub const SUBSTRING_SPAN: f64 = 0.08;

/// Which matching rule produced a cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Empty query, matches everything
    EmptyQuery,
    /// Text equals the query
    Exact,
    /// Text starts with the query
    Prefix,
    /// Text contains the query contiguously
    Substring,
    /// Query characters appear in order, with gaps
    Subsequence,
    /// No match
    None,
}

impl MatchTier {
    /// Short lowercase name, as used in JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchTier::EmptyQuery => "empty_query",
            MatchTier::Exact => "exact",
            MatchTier::Prefix => "prefix",
            MatchTier::Substring => "substring",
            MatchTier::Subsequence => "subsequence",
            MatchTier::None => "none",
        }
    }

    /// Returns true for every tier except [`MatchTier::None`].
    #[inline]
    pub fn is_match(self) -> bool {
        self != MatchTier::None
    }
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full account of how a query matched a text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchExplanation {
    /// Rule that fired
    pub tier: MatchTier,
    /// Final cost, [`NO_MATCH`] when `tier` is [`MatchTier::None`]
    pub cost: f64,
    /// Sub-scores, present only for [`MatchTier::Subsequence`]
    pub breakdown: Option<SubsequenceBreakdown>,
}

impl MatchExplanation {
    fn tier(tier: MatchTier, cost: f64) -> Self {
        Self { tier, cost, breakdown: None }
    }
}

/// Score `text` against `query`, ignoring case.
///
/// # Example
/// ```
/// use fuzzrank_search::score;
///
/// assert_eq!(score("Chrome", "chrome"), 0.0);
/// assert_eq!(score("chr", "Chrome"), 0.01);
/// assert!(score("xyz", "Chrome").is_infinite());
/// ```
pub fn score(query: &str, text: &str) -> f64 {
    score_folded(&query.to_lowercase(), &text.to_lowercase())
}

/// Score two strings that are already case-folded.
pub fn score_folded(query: &str, text: &str) -> f64 {
    explain_folded(query, text).cost
}

/// Name the rule that matches `text` against `query`, ignoring case.
pub fn classify(query: &str, text: &str) -> MatchTier {
    explain(query, text).tier
}

/// Score `text` against `query`, ignoring case, keeping the details.
pub fn explain(query: &str, text: &str) -> MatchExplanation {
    explain_folded(&query.to_lowercase(), &text.to_lowercase())
}

/// [`explain`] for strings that are already case-folded.
pub fn explain_folded(query: &str, text: &str) -> MatchExplanation {
    if query.is_empty() {
        return MatchExplanation::tier(MatchTier::EmptyQuery, 0.0);
    }
    if text.is_empty() {
        return MatchExplanation::tier(MatchTier::None, NO_MATCH);
    }
    if text == query {
        return MatchExplanation::tier(MatchTier::Exact, 0.0);
    }

    let query_chars = graphemes(query);
    let text_chars = graphemes(text);

    if text_chars.starts_with(&query_chars) {
        return MatchExplanation::tier(MatchTier::Prefix, PREFIX_COST);
    }

    if query_chars.len() < text_chars.len()
        && text_chars
            .windows(query_chars.len())
            .any(|window| window == query_chars.as_slice())
    {
        let coverage = query_chars.len() as f64 / text_chars.len() as f64;
        let cost = SUBSTRING_BASE_COST + (1.0 - coverage) * SUBSTRING_SPAN;
        return MatchExplanation::tier(MatchTier::Substring, cost);
    }

    match subsequence_match(&query_chars, &text_chars) {
        Some(breakdown) => MatchExplanation {
            tier: MatchTier::Subsequence,
            cost: breakdown.cost(),
            breakdown: Some(breakdown),
        },
        None => MatchExplanation::tier(MatchTier::None, NO_MATCH),
    }
}
