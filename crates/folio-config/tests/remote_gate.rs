//! Remote configuration gate tests for folio-config.
// crates/folio-config/tests/remote_gate.rs
// =============================================================================
// Module: Remote Gate Tests
// Description: Validate when the remote store counts as configured.
// Purpose: Ensure the descriptor requires both connection values.
// =============================================================================

use folio_config::FolioConfig;

mod common;

type TestResult = Result<(), String>;

#[test]
fn remote_unconfigured_by_default() -> TestResult {
    let config = FolioConfig::load_with_env(Some(&common::write_config("")?.1), common::empty_env)
        .map_err(|err| err.to_string())?;
    if config.remote_descriptor().is_some() || config.is_remote_configured() {
        return Err("remote should be unconfigured without url and key".to_string());
    }
    Ok(())
}

#[test]
fn remote_requires_both_values() -> TestResult {
    let (_dir, path) = common::write_config("[remote]\nurl = \"https://db.example.test\"\n")?;
    let config =
        FolioConfig::load_with_env(Some(&path), common::empty_env).map_err(|err| err.to_string())?;
    if config.is_remote_configured() {
        return Err("url alone must not configure the remote".to_string());
    }
    let lookup = common::env_from(&[("FOLIO_REMOTE_READ_KEY", "anon-key")]);
    let config = FolioConfig::load_with_env(Some(&path), lookup).map_err(|err| err.to_string())?;
    let descriptor = config.remote_descriptor().ok_or("descriptor expected")?;
    if descriptor.base_url != "https://db.example.test" || descriptor.read_key != "anon-key" {
        return Err(format!("unexpected descriptor {descriptor:?}"));
    }
    Ok(())
}

#[test]
fn blank_values_do_not_configure_remote() -> TestResult {
    let (_dir, path) = common::write_config("")?;
    let lookup = common::env_from(&[
        ("FOLIO_REMOTE_URL", "https://db.example.test"),
        ("FOLIO_REMOTE_READ_KEY", "   "),
    ]);
    let config = FolioConfig::load_with_env(Some(&path), lookup).map_err(|err| err.to_string())?;
    if config.is_remote_configured() {
        return Err("blank read key must not configure the remote".to_string());
    }
    Ok(())
}

#[test]
fn env_overrides_file_values() -> TestResult {
    let (_dir, path) = common::write_config(
        "[remote]\nurl = \"https://file.example.test\"\nread_key = \"file-key\"\ntimeout_ms = 2500\n",
    )?;
    let lookup = common::env_from(&[("FOLIO_REMOTE_URL", "https://env.example.test/")]);
    let config = FolioConfig::load_with_env(Some(&path), lookup).map_err(|err| err.to_string())?;
    let descriptor = config.remote_descriptor().ok_or("descriptor expected")?;
    if descriptor.base_url != "https://env.example.test/" {
        return Err("env url should override file url".to_string());
    }
    if descriptor.read_key != "file-key" || descriptor.timeout_ms != 2_500 {
        return Err("file values should carry into descriptor".to_string());
    }
    Ok(())
}

#[test]
fn env_url_is_validated() -> TestResult {
    let (_dir, path) = common::write_config("")?;
    let lookup = common::env_from(&[("FOLIO_REMOTE_URL", "ftp://db.example.test")]);
    match FolioConfig::load_with_env(Some(&path), lookup) {
        Err(err) if err.to_string().contains("remote.url") => Ok(()),
        other => Err(format!("expected remote.url error, got {other:?}")),
    }
}

#[test]
fn remote_debug_redacts_read_key() -> TestResult {
    let config = common::config_from_toml("[remote]\nread_key = \"very-secret\"\n")
        .map_err(|err| err.to_string())?;
    if format!("{:?}", config.remote).contains("very-secret") {
        return Err("read key leaked into debug output".to_string());
    }
    Ok(())
}
