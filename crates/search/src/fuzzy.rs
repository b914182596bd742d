//! Ordered subsequence matching.
//!
//! Query characters are matched greedily against the text, each one at its
//! first occurrence at or after the previous match. A successful walk is
//! summarised by four sub-scores, each in `[0, 1]` with 0 being best, that
//! the scorer folds into a single cost.

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// Weight of the gap sub-score in the combined cost.
pub const GAP_WEIGHT: f64 = 0.35;
/// Weight of the start-position sub-score in the combined cost.
pub const START_WEIGHT: f64 = 0.15;
/// Weight of the consecutiveness sub-score in the combined cost.
pub const CONSECUTIVE_WEIGHT: f64 = 0.30;
/// Weight of the coverage sub-score in the combined cost.
pub const COVERAGE_WEIGHT: f64 = 0.20;

/// Lowest cost a subsequence match may report.
pub const MIN_FUZZY_COST: f64 = 0.01;
/// Highest cost a subsequence match may report.
pub const MAX_FUZZY_COST: f64 = 1.0;

/// Details of a successful subsequence match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubsequenceBreakdown {
    /// Text position of each matched query character
    pub positions: Vec<usize>,
    /// Unmatched text characters between consecutive matches
    pub total_gap: usize,
    /// Longest streak of matches with no gap between them
    pub longest_run: usize,
    /// Spread of the matches (0 = no gaps)
    pub gap_score: f64,
    /// How late the first match occurs (0 = at the start)
    pub start_score: f64,
    /// Lack of adjacency between matches (0 = fully consecutive)
    pub consecutive_score: f64,
    /// Share of the text not covered by the query
    pub coverage_score: f64,
}

impl SubsequenceBreakdown {
    /// Weighted combination of the sub-scores, clamped to
    /// `[MIN_FUZZY_COST, MAX_FUZZY_COST]`.
    pub fn cost(&self) -> f64 {
        let combined = self.gap_score * GAP_WEIGHT
            + self.start_score * START_WEIGHT
            + self.consecutive_score * CONSECUTIVE_WEIGHT
            + self.coverage_score * COVERAGE_WEIGHT;
        combined.clamp(MIN_FUZZY_COST, MAX_FUZZY_COST)
    }
}

/// Split text into user-perceived characters.
#[inline]
pub(crate) fn graphemes(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}

/// Match `query` against `text` as an ordered subsequence.
///
/// Both slices are grapheme clusters of already case-folded strings.
/// Returns `None` when some query character cannot be found in order, or
/// when the query is empty.
pub fn subsequence_match(query: &[&str], text: &[&str]) -> Option<SubsequenceBreakdown> {
    if query.is_empty() {
        return None;
    }

    let mut positions = Vec::with_capacity(query.len());
    let mut total_gap = 0;
    let mut run = 0;
    let mut longest_run = 0;

    let mut pending = query.iter().peekable();
    for (index, ch) in text.iter().enumerate() {
        let Some(&wanted) = pending.peek() else {
            break;
        };
        if ch != wanted {
            continue;
        }

        if let Some(&last) = positions.last() {
            let gap = index - last - 1;
            total_gap += gap;
            if gap == 0 {
                run += 1;
                longest_run = longest_run.max(run);
            } else {
                run = 0;
            }
        }
        positions.push(index);
        pending.next();
    }

    if pending.peek().is_some() {
        return None;
    }

    let query_len = query.len() as f64;
    let text_len = text.len() as f64;

    let max_gap = text_len - query_len;
    let gap_score = if max_gap > 0.0 { total_gap as f64 / max_gap } else { 0.0 };
    let start_score = positions[0] as f64 / text_len;
    let consecutive_score = if query.len() > 1 {
        1.0 - longest_run as f64 / (query_len - 1.0)
    } else {
        0.0
    };
    let coverage_score = 1.0 - query_len / text_len;

    Some(SubsequenceBreakdown {
        positions,
        total_gap,
        longest_run,
        gap_score,
        start_score,
        consecutive_score,
        coverage_score,
    })
}

/// Check if text contains all characters of query in order.
///
/// Convenience over [`subsequence_match`] for plain strings; no case folding
/// is applied.
pub fn is_subsequence(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    subsequence_match(&graphemes(query), &graphemes(text)).is_some()
}
