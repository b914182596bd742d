//! Ranking items described as JSON.
//!
//! Input is an array of objects with an `id` and either a `properties` array
//! of `{ "text", "weight" }` records or a single `text` field:
//!
//! ```json
//! [
//!   { "id": "google-chrome", "properties": [
//!       { "text": "Google Chrome", "weight": 2.0 },
//!       { "text": "google-chrome" } ] },
//!   { "id": "firefox", "text": "Firefox" }
//! ]
//! ```

use crate::error::Result;
use crate::options::{search_with_options, SearchOptions};
use crate::property::{SearchProperty, Searchable};
use serde::{Deserialize, Serialize};

/// An item read from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonItem {
    /// Caller-side identifier, echoed in results
    pub id: String,
    /// Weighted properties
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<SearchProperty>,
    /// Shorthand for a single property with the default weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Searchable for JsonItem {
    fn search_properties(&self) -> Vec<SearchProperty> {
        let mut properties = self.properties.clone();
        if let Some(text) = &self.text {
            properties.push(SearchProperty::new(text.as_str()));
        }
        properties
    }
}

/// A ranked item, identified by its JSON id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedItem {
    /// The item id
    pub id: String,
    /// Weighted cost (lower is better)
    pub score: f64,
}

/// Parse a JSON array of items.
pub fn parse_items(items_json: &str) -> Result<Vec<JsonItem>> {
    Ok(serde_json::from_str(items_json)?)
}

/// Rank parsed items, best first.
pub fn rank_items(query: &str, items: &[JsonItem], options: &SearchOptions) -> Vec<RankedItem> {
    search_with_options(query, items, JsonItem::search_properties, options)
        .into_iter()
        .map(|result| RankedItem {
            id: items[result.index].id.clone(),
            score: result.score,
        })
        .collect()
}

/// Parse `items_json` and rank it against `query`.
///
/// # Example
/// ```
/// use fuzzrank_search::{search_json, SearchOptions};
///
/// let items = r#"[{"id": "ff", "text": "Firefox"}, {"id": "gc", "text": "Google Chrome"}]"#;
/// let ranked = search_json("chrome", items, &SearchOptions::default()).unwrap();
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].id, "gc");
/// ```
pub fn search_json(query: &str, items_json: &str, options: &SearchOptions) -> Result<Vec<RankedItem>> {
    let items = parse_items(items_json)?;
    Ok(rank_items(query, &items, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchErrorCode;

    const CASKS: &str = r#"[
        {"id": "google-chrome", "properties": [
            {"text": "Google Chrome", "weight": 2.0},
            {"text": "google-chrome"}
        ]},
        {"id": "firefox", "text": "Firefox"},
        {"id": "chromium", "properties": [{"text": "Chromium", "weight": 2.0}]},
        {"id": "empty"}
    ]"#;

    #[test]
    fn test_parse_items() {
        let items = parse_items(CASKS).unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].properties.len(), 2);
        assert_eq!(items[0].properties[1].weight(), 1.0);
        assert_eq!(items[1].search_properties().len(), 1);
        assert!(items[3].search_properties().is_empty());
    }

    #[test]
    fn test_search_json_ranks_by_id() {
        let ranked = search_json("chrom", CASKS, &SearchOptions::default()).unwrap();
        let ids: Vec<&str> = ranked.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["chromium", "google-chrome"]);
    }

    #[test]
    fn test_empty_query_keeps_items_with_properties() {
        let ranked = search_json("", CASKS, &SearchOptions::default()).unwrap();
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn test_limit_applies() {
        let options = SearchOptions::default().with_limit(1);
        let ranked = search_json("", CASKS, &options).unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, "google-chrome");
    }

    #[test]
    fn test_invalid_json() {
        let err = search_json("a", "not json", &SearchOptions::default()).unwrap_err();
        assert_eq!(err.code(), SearchErrorCode::JsonParsing);
    }

    #[test]
    fn test_bad_weight_does_not_abort() {
        let json = r#"[{"id": "a", "properties": [{"text": "Alpha", "weight": 0}]}]"#;
        let ranked = search_json("alpha", json, &SearchOptions::default()).unwrap();
        assert_eq!(ranked[0].score, 0.0);
    }
}
