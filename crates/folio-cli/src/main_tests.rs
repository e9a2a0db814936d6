// crates/folio-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Helpers Tests
// Description: Unit tests for argument parsing and command execution.
// Purpose: Ensure commands resolve from the baseline when no store is configured.
// Dependencies: folio-cli main helpers
// ============================================================================

//! ## Overview
//! Parses argument vectors with clap and runs commands against a static-only
//! resolver built from default configuration.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;

use clap::Parser;
use folio_config::FolioConfig;
use folio_content::ContentResolver;
use serde_json::json;

use super::Cli;
use super::Commands;
use super::EntityCommand;
use super::config_summary;
use super::execute;
use super::log_filter;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn static_resolver() -> ContentResolver {
    ContentResolver::from_config(&FolioConfig::default()).unwrap()
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("folio").chain(args.iter().copied())).unwrap()
}

fn run_args(args: &[&str]) -> Result<serde_json::Value, String> {
    let cli = parse(args);
    execute(&static_resolver(), &cli.command).map_err(|err| err.to_string())
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

#[test]
fn parses_entity_get_with_locale() {
    let cli = parse(&["--config", "site.toml", "articles", "get", "bilingual-slugs", "--locale", "ro"]);
    assert_eq!(cli.config.unwrap().to_str(), Some("site.toml"));
    let Commands::Articles {
        command: EntityCommand::Get(get),
    } = cli.command
    else {
        panic!("expected articles get");
    };
    assert_eq!(get.slug, "bilingual-slugs");
    assert_eq!(get.locale.as_deref(), Some("ro"));
}

#[test]
fn rejects_missing_subcommand() {
    assert!(Cli::try_parse_from(["folio", "projects"]).is_err());
}

// ============================================================================
// SECTION: Commands
// ============================================================================

#[test]
fn messages_path_prints_single_node() {
    let output = run_args(&["messages", "ro", "--path", "nav.home"]).unwrap();
    assert_eq!(output["value"], json!("Acasă"));
    assert_eq!(output["origin"]["source"], json!("baseline"));
    assert_eq!(output["origin"]["reason"], json!("unconfigured"));
}

#[test]
fn messages_unknown_path_fails() {
    let err = run_args(&["messages", "en", "--path", "nav.nowhere"]).unwrap_err();
    assert!(err.contains("nav.nowhere"));
}

#[test]
fn messages_invalid_locale_fails() {
    let err = run_args(&["messages", "not a locale"]).unwrap_err();
    assert!(err.contains("invalid locale"));
}

#[test]
fn messages_report_includes_tree() {
    let output = run_args(&["messages", "fr"]).unwrap();
    assert_eq!(output["tree"]["nav"]["home"], json!("Home"));
    assert_eq!(output["conflicts"], json!([]));
}

#[test]
fn entity_get_missing_slug_fails() {
    let err = run_args(&["projects", "get", "nope"]).unwrap_err();
    assert_eq!(err, "no project with slug `nope`");
}

#[test]
fn entity_adjacent_and_params() {
    let adjacent = run_args(&["projects", "adjacent", "atlas-logistics"]).unwrap();
    assert!(adjacent["previous"].is_null());
    assert_eq!(adjacent["next"]["slug"], json!("harbor-clinic"));

    let params = run_args(&["articles", "params"]).unwrap();
    let params = params.as_array().unwrap();
    assert_eq!(params.len(), 4);
    assert_eq!(params[0], json!({"locale": "en", "slug": "static-first-resilience"}));
}

#[test]
fn entity_slugs_for_locale() {
    let slugs = run_args(&["articles", "slugs", "ro"]).unwrap();
    assert_eq!(slugs, json!(["static-first-resilience", "bilingual-slugs"]));
}

#[test]
fn config_summary_reports_source_and_remote() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("folio.toml");
    fs::write(&path, "[locales]\ndefault = \"ro\"\nsupported = [\"ro\", \"en\"]\n").unwrap();
    let config = FolioConfig::load_with_env(Some(&path), |_| None).unwrap();
    let summary = config_summary(&config).unwrap();
    assert_eq!(summary["default_locale"], json!("ro"));
    assert_eq!(summary["supported_locales"], json!(["ro", "en"]));
    assert_eq!(summary["remote_configured"], json!(false));
    assert_eq!(summary["tables"]["articles"], json!("articles"));
    assert!(summary["source"].as_str().unwrap().ends_with("folio.toml"));
}

// ============================================================================
// SECTION: Logging
// ============================================================================

#[test]
fn log_filter_prefers_environment() {
    assert_eq!(log_filter(Some("debug"), "warn").to_string(), "debug");
    assert_eq!(log_filter(None, "warn").to_string(), "warn");
}
