// crates/folio-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config loading and validation tests.
// Purpose: Reduce duplication across integration tests for folio-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::fs;
use std::path::PathBuf;

use folio_config::FolioConfig;
use tempfile::TempDir;

/// Parses a TOML string into a `FolioConfig` for tests.
pub fn config_from_toml(toml_str: &str) -> Result<FolioConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Writes `content` to `folio.toml` inside a fresh temporary directory.
pub fn write_config(content: &str) -> Result<(TempDir, PathBuf), String> {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("folio.toml");
    fs::write(&path, content).map_err(|err| err.to_string())?;
    Ok((dir, path))
}

/// Environment lookup that sees no variables.
pub fn empty_env(_name: &str) -> Option<String> {
    None
}

/// Builds an environment lookup over fixed pairs.
pub fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
    let owned: Vec<(String, String)> =
        pairs.iter().map(|(key, value)| ((*key).to_string(), (*value).to_string())).collect();
    move |name: &str| owned.iter().find(|(key, _)| key == name).map(|(_, value)| value.clone())
}
