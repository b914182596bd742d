//! Weighted fuzzy matching and ranking.
//!
//! This crate provides:
//! - A tiered match cost (exact, prefix, substring, ordered subsequence)
//! - Ranking of arbitrary items through weighted text properties
//! - Optional rayon fan-out and a tokio boundary for interactive callers
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use fuzzrank_search::{search_items, SearchProperty, Searchable};
//!
//! struct Cask {
//!     name: &'static str,
//!     token: &'static str,
//! }
//!
//! impl Searchable for Cask {
//!     fn search_properties(&self) -> Vec<SearchProperty> {
//!         vec![SearchProperty::weighted(self.name, 2.0), SearchProperty::new(self.token)]
//!     }
//! }
//!
//! let casks = [
//!     Cask { name: "Google Chrome", token: "google-chrome" },
//!     Cask { name: "Firefox", token: "firefox" },
//! ];
//!
//! let results = search_items("gc", &casks);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].index, 0);
//! ```
//!
//! # Features
//!
//! - `parallel` (default): score items on the rayon pool
//! - `async` (default): `search_async` and `SearchSession::run` on tokio's
//!   blocking pool; ignored on `wasm32` targets
//! - `wasm`: `wasm-bindgen` exports `fuzzy_score` and `fuzzy_search_json`
//!
//! Building the WASM bindings:
//!
//! ```text
//! cargo build -p fuzzrank-search --target wasm32-unknown-unknown --features wasm
//! ```

pub mod fuzzy;
mod scorer;
mod property;
mod searcher;
mod options;
mod session;
mod json;
mod error;

#[cfg(feature = "wasm")]
mod wasm;


pub use scorer::{
    classify, explain, explain_folded, score, score_folded, MatchExplanation, MatchTier, NO_MATCH,
    PREFIX_COST, SUBSTRING_BASE_COST, SUBSTRING_SPAN,
};
pub use fuzzy::{is_subsequence, SubsequenceBreakdown};
pub use property::{SearchProperty, Searchable, DEFAULT_WEIGHT};
pub use searcher::{best_weighted_cost, search, search_items, SearchResult};
pub use options::{search_with_options, truncate_query, SearchOptions, DEFAULT_MAX_QUERY_LEN};
pub use session::{SearchSession, SearchTicket};
#[cfg(all(feature = "async", not(target_arch = "wasm32")))]
pub use session::{search_async, search_items_async};
pub use json::{parse_items, rank_items, search_json, JsonItem, RankedItem};
pub use error::{Result, SearchError, SearchErrorCode};
