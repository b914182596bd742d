//! `fuzzrank score`

use anyhow::Result;
use fuzzrank_cli::output::format_score;
use fuzzrank_search::{explain as explain_match, MatchExplanation};
use owo_colors::OwoColorize;

pub fn run(query: &str, text: &str, explain: bool, json: bool) -> Result<()> {
    let explanation = explain_match(query, text);

    if json {
        println!("{}", serde_json::to_string_pretty(&explanation)?);
        return Ok(());
    }

    println!("{}", format_score(explanation.cost));
    if explain {
        print_explanation(&explanation);
    }
    Ok(())
}

fn print_explanation(explanation: &MatchExplanation) {
    println!("{} {}", "tier:".dimmed(), explanation.tier);

    if let Some(b) = &explanation.breakdown {
        println!("{} {:?}", "positions:".dimmed(), b.positions);
        println!("{} {:.4} (total gap {})", "gap:".dimmed(), b.gap_score, b.total_gap);
        println!("{} {:.4}", "start:".dimmed(), b.start_score);
        println!("{} {:.4} (longest run {})", "consecutive:".dimmed(), b.consecutive_score, b.longest_run);
        println!("{} {:.4}", "coverage:".dimmed(), b.coverage_score);
    }
}
