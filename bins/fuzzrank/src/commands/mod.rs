//! Subcommand implementations

pub mod bench;
pub mod score;
pub mod search;

use anyhow::{Context, Result};
use fuzzrank_search::{parse_items, JsonItem};
use std::path::Path;

/// Read and parse a JSON item file
pub fn load_items(path: &Path) -> Result<Vec<JsonItem>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read items file {}", path.display()))?;
    let items = parse_items(&content)
        .with_context(|| format!("Failed to parse items file {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = items.len(), "Items loaded");
    Ok(items)
}
