use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/casks.json");

fn fuzzrank() -> Command {
    let mut cmd = Command::cargo_bin("fuzzrank").unwrap();
    cmd.env_remove("FUZZRANK_CONFIG")
        .env_remove("FUZZRANK_LIMIT")
        .env_remove("FUZZRANK_MAX_SCORE")
        .env("NO_COLOR", "1");
    cmd
}

fn ranked_ids(stdout: &[u8]) -> Vec<String> {
    let value: serde_json::Value = serde_json::from_slice(stdout).unwrap();
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn score_exact_match() {
    fuzzrank()
        .args(["score", "Chrome", "chrome"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0.0000"));
}

#[test]
fn score_no_match() {
    fuzzrank()
        .args(["score", "xyz", "Firefox"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no match"));
}

#[test]
fn score_explain_subsequence() {
    fuzzrank()
        .args(["score", "gc", "Google Chrome", "--explain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("subsequence"))
        .stdout(predicate::str::contains("[0, 7]"));
}

#[test]
fn score_json() {
    let output = fuzzrank().args(["score", "chr", "Chromium", "--json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["tier"], "prefix");
    assert_eq!(value["cost"], 0.01);
}

#[test]
fn search_ranks_fixture() {
    let output = fuzzrank()
        .args(["search", "chrom", "--items", FIXTURE, "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(ranked_ids(&output.stdout), vec!["chromium", "google-chrome"]);
}

#[test]
fn search_limit_flag() {
    let output = fuzzrank()
        .args(["search", "", "--items", FIXTURE, "--json", "--limit", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(ranked_ids(&output.stdout), vec!["google-chrome", "firefox"]);
}

#[test]
fn search_text_output() {
    fuzzrank()
        .args(["search", "code", "--items", FIXTURE])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 match for 'code'"))
        .stdout(predicate::str::contains("visual-studio-code"));
}

#[test]
fn search_reads_config_file() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "[search]\nlimit = 1").unwrap();

    let output = fuzzrank()
        .args(["search", "", "--items", FIXTURE, "--json", "--config"])
        .arg(config.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(ranked_ids(&output.stdout).len(), 1);
}

#[test]
fn search_rejects_negative_threshold() {
    fuzzrank()
        .args(["search", "a", "--items", FIXTURE, "--max-score=-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_score"));
}

#[test]
fn search_missing_items_file() {
    fuzzrank()
        .args(["search", "a", "--items", "/nonexistent/items.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read items file"));
}

#[test]
fn bench_reports_metrics() {
    fuzzrank()
        .args(["bench", "--items", FIXTURE, "-n", "3", "--queries", "chr", "fox"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6 searches over 5 items"))
        .stdout(predicate::str::contains("search.duration_ms"));
}
