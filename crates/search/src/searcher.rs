//! Ranking a collection of items against a query.
//!
//! Every search rescans the whole input. Items are scored independently, so
//! with the `parallel` feature the scan runs on the rayon pool; the final
//! stable sort restores a deterministic order either way.

use crate::property::{SearchProperty, Searchable};
use crate::scorer::{score_folded, NO_MATCH};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// A matching item and its cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Position of the item in the searched slice
    pub index: usize,
    /// Weighted cost, finite and non-negative (0 is best)
    pub score: f64,
}

/// Rank `items` against `query`, best match first.
///
/// `properties` returns the weighted text fields of an item. An item's score
/// is the lowest weighted cost over its properties; items where nothing
/// matches are left out. Equal scores keep their input order.
///
/// # Example
/// ```
/// use fuzzrank_search::{search, SearchProperty};
///
/// let apps = vec![("Visual Studio Code", "visual-studio-code"), ("Firefox", "firefox")];
/// let results = search("code", &apps, |(name, token)| {
///     vec![SearchProperty::weighted(*name, 2.0), SearchProperty::new(*token)]
/// });
///
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].index, 0);
/// ```
pub fn search<I, F, P>(query: &str, items: &[I], properties: F) -> Vec<SearchResult>
where
    I: Sync,
    F: Fn(&I) -> P + Sync,
    P: IntoIterator,
    P::Item: Borrow<SearchProperty>,
{
    let query = query.to_lowercase();
    let score_item = |(index, item): (usize, &I)| {
        let score = best_weighted_cost(&query, properties(item));
        score.is_finite().then_some(SearchResult { index, score })
    };

    #[cfg(feature = "parallel")]
    let mut results: Vec<SearchResult> = {
        use rayon::prelude::*;
        items.par_iter().enumerate().filter_map(score_item).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let mut results: Vec<SearchResult> = items.iter().enumerate().filter_map(score_item).collect();

    results.sort_by(|a, b| a.score.total_cmp(&b.score));

    tracing::debug!(
        query_len = query.len(),
        items = items.len(),
        matches = results.len(),
        "Search completed"
    );

    results
}

/// Rank items that describe their own search properties.
pub fn search_items<I>(query: &str, items: &[I]) -> Vec<SearchResult>
where
    I: Searchable + Sync,
{
    search(query, items, I::search_properties)
}

/// Lowest weighted cost of a folded query over a set of properties.
///
/// Returns [`NO_MATCH`] when there are no properties or none of them match.
pub fn best_weighted_cost<P>(folded_query: &str, properties: P) -> f64
where
    P: IntoIterator,
    P::Item: Borrow<SearchProperty>,
{
    properties.into_iter().fold(NO_MATCH, |best, property| {
        let property = property.borrow();
        let raw = score_folded(folded_query, &property.text().to_lowercase());
        if raw.is_finite() {
            best.min(property.weigh(raw))
        } else {
            best
        }
    })
}
