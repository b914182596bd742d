//! fuzzrank: rank items from a JSON file against a fuzzy query.

use clap::{Parser, Subcommand};
use fuzzrank_cli::output::Status;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod config;

use config::Config;

/// Weighted fuzzy search over JSON item lists
#[derive(Parser)]
#[command(name = "fuzzrank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to ./.fuzzrank.toml if present)
    #[arg(short, long, global = true, env = "FUZZRANK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single text against a query
    Score {
        /// Search query
        query: String,

        /// Text to match against
        text: String,

        /// Show which rule matched and the sub-scores
        #[arg(short, long)]
        explain: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rank the items of a JSON file
    Search {
        /// Search query
        query: String,

        /// JSON array of items with `id` and `properties` (or `text`)
        #[arg(short, long)]
        items: PathBuf,

        /// Maximum number of results
        #[arg(short, long, env = "FUZZRANK_LIMIT")]
        limit: Option<usize>,

        /// Drop results scoring above this threshold
        #[arg(long, env = "FUZZRANK_MAX_SCORE")]
        max_score: Option<f64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Time repeated searches and print the collected metrics
    Bench {
        /// JSON array of items
        #[arg(short, long)]
        items: PathBuf,

        /// Queries to run on each iteration
        #[arg(short, long, num_args = 1.., default_values = ["a", "co", "gch"])]
        queries: Vec<String>,

        /// Number of iterations
        #[arg(short = 'n', long, default_value = "100")]
        iterations: usize,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            Status::error(&format!("{:#}", e));
            return ExitCode::FAILURE;
        }
    };

    let mut log = config.schema.log.clone();
    if cli.verbose {
        log.log_level = "fuzzrank=debug,fuzzrank_search=debug".to_string();
    }
    if let Err(e) = fuzzrank_telemetry::init_with_config(log) {
        Status::warning(&format!("Logging disabled: {}", e));
    }

    tracing::debug!(config = ?config.path, "Configuration loaded");

    let result = match cli.command {
        Commands::Score { query, text, explain, json } => {
            commands::score::run(&query, &text, explain, json)
        }

        Commands::Search { query, items, limit, max_score, json } => {
            let mut options = config.schema.search.clone();
            options.limit = limit.or(options.limit);
            options.max_score = max_score.or(options.max_score);
            commands::search::run(query, &items, options, json).await
        }

        Commands::Bench { items, queries, iterations } => {
            commands::bench::run(&items, &queries, iterations, &config.schema.search)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Status::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
