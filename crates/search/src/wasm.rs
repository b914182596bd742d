//! WASM bindings for the matcher.

use crate::SearchOptions;
use wasm_bindgen::prelude::*;

/// Match cost of `text` against `query`.
///
/// # Returns
/// Cost between 0 (perfect) and 1, or `Infinity` when nothing matches
#[wasm_bindgen]
pub fn fuzzy_score(query: &str, text: &str) -> f64 {
    crate::score(query, text)
}

/// Search items and return ranked results as JSON.
///
/// # Arguments
/// * `query` - Search query
/// * `items_json` - JSON array of items with `id` and `properties` (or `text`) fields
/// * `max_results` - Maximum results to return (0 for all)
///
/// # Returns
/// JSON array of results with `id` and `score` fields, best match first
#[wasm_bindgen]
pub fn fuzzy_search_json(query: &str, items_json: &str, max_results: usize) -> String {
    let mut options = SearchOptions::default();
    if max_results > 0 {
        options.limit = Some(max_results);
    }

    crate::search_json(query, items_json, &options)
        .ok()
        .and_then(|ranked| serde_json::to_string(&ranked).ok())
        .unwrap_or_else(|| "[]".to_string())
}
