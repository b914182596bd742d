//! `fuzzrank search`

use super::load_items;
use anyhow::Result;
use fuzzrank_cli::output::{format_count, format_ranked, Status};
use fuzzrank_cli::progress;
use fuzzrank_search::{search_async, JsonItem, RankedItem, SearchOptions, Searchable};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

pub async fn run(query: String, items_path: &Path, options: SearchOptions, json: bool) -> Result<()> {
    options.validate()?;

    let spinner = (!json).then(|| progress::spinner("Loading items..."));
    let items: Arc<[JsonItem]> = load_items(items_path)?.into();
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let prepared = options.prepare_query(&query).into_owned();
    let started = Instant::now();
    let mut results = search_async(prepared.clone(), Arc::clone(&items), JsonItem::search_properties).await?;
    fuzzrank_telemetry::metrics().record_search(items.len(), results.len(), started.elapsed());
    options.apply(&mut results);

    let ranked: Vec<RankedItem> = results
        .iter()
        .map(|r| RankedItem {
            id: items[r.index].id.clone(),
            score: r.score,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        Status::warning(&format!("No matches for '{}'", prepared));
        return Ok(());
    }

    Status::header(&format!(
        "{} for '{}'",
        format_count(ranked.len(), "match", "matches"),
        prepared
    ));
    for (rank, item) in ranked.iter().enumerate() {
        println!("{}", format_ranked(rank + 1, item.score, &item.id));
    }
    Ok(())
}
