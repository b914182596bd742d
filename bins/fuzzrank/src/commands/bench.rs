//! `fuzzrank bench`

use super::load_items;
use anyhow::{bail, Result};
use fuzzrank_cli::output::{format_duration, Status};
use fuzzrank_cli::progress;
use fuzzrank_search::{search_with_options, JsonItem, SearchOptions, Searchable};
use fuzzrank_telemetry::{metrics, Timer};
use std::path::Path;
use std::time::Instant;

pub fn run(items_path: &Path, queries: &[String], iterations: usize, options: &SearchOptions) -> Result<()> {
    if iterations == 0 {
        bail!("iterations must be at least 1");
    }
    options.validate()?;

    let items = load_items(items_path)?;
    let total = Timer::start("bench.total_ms");

    let pb = progress::progress_bar(iterations as u64, "Searching");
    for _ in 0..iterations {
        for query in queries {
            let started = Instant::now();
            let results = search_with_options(query, &items, JsonItem::search_properties, options);
            metrics().record_search(items.len(), results.len(), started.elapsed());
        }
        pb.inc(1);
    }
    let elapsed = total.stop();
    progress::finish_success(&pb, "done");

    Status::success(&format!(
        "{} searches over {} items in {}",
        iterations * queries.len(),
        items.len(),
        format_duration(elapsed)
    ));
    println!("{}", serde_json::to_string_pretty(&metrics().export_json())?);
    Ok(())
}
