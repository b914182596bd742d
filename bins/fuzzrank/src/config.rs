//! Configuration file loading
//!
//! ```toml
//! [search]
//! max_query_len = 30
//! max_score = 0.3
//! limit = 20
//!
//! [log]
//! log_level = "info"
//! json = false
//! ```

use anyhow::{Context, Result};
use fuzzrank_search::SearchOptions;
use fuzzrank_telemetry::TelemetryConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Files probed, in order, when no path is given
const CANDIDATES: [&str; 3] = [".fuzzrank.toml", "fuzzrank.toml", ".config/fuzzrank.toml"];

/// On-disk configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigSchema {
    pub search: SearchOptions,
    pub log: TelemetryConfig,
}

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist; otherwise the standard locations are
    /// probed and defaults apply when none is found.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).or_else(find_config_file);

        let schema = match &config_path {
            Some(p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        schema
            .search
            .validate()
            .with_context(|| format!("Invalid [search] section in {}", describe(&config_path)))?;

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

fn describe(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string())
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&content).with_context(|| format!("Failed to parse config file {}", path.display()))
}
