// crates/folio-config/src/config.rs
// ============================================================================
// Module: Folio Configuration
// Description: Configuration loading and validation for Folio.
// Purpose: Provide strict config parsing with hard limits and an explicit remote gate.
// Dependencies: folio-core, folio-store-http, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits,
//! then overlaid with the remote connection environment variables. Absence of
//! a config file is normal and yields static-only defaults; a config file that
//! is present but malformed fails closed.
//!
//! ## Invariants
//! - A validated config always yields a valid [`LocaleSet`].
//! - [`FolioConfig::remote_descriptor`] returns `Some` only when both the
//!   remote URL and read key are non-empty.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use folio_core::LocaleSet;
use folio_store_http::HttpStoreConfig;
use folio_store_http::http::DEFAULT_REST_PATH;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename looked up in the working directory.
const DEFAULT_CONFIG_NAME: &str = "folio.toml";
/// Environment variable naming the config file path.
pub const CONFIG_ENV_VAR: &str = "FOLIO_CONFIG";
/// Environment variable overriding `remote.url`.
pub const REMOTE_URL_ENV_VAR: &str = "FOLIO_REMOTE_URL";
/// Environment variable overriding `remote.read_key`.
pub const REMOTE_READ_KEY_ENV_VAR: &str = "FOLIO_REMOTE_READ_KEY";
/// Maximum config file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Minimum remote request timeout.
pub(crate) const MIN_REMOTE_TIMEOUT_MS: u64 = 100;
/// Maximum remote request timeout.
pub(crate) const MAX_REMOTE_TIMEOUT_MS: u64 = 30_000;
/// Default remote request timeout.
pub(crate) const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 5_000;
/// Default remote response size cap.
pub(crate) const DEFAULT_MAX_RESPONSE_BYTES: usize = 4 * 1024 * 1024;
/// Upper bound for the remote response size cap.
pub(crate) const MAX_MAX_RESPONSE_BYTES: usize = 64 * 1024 * 1024;
/// Maximum relation name length.
pub(crate) const MAX_TABLE_NAME_LENGTH: usize = 63;
/// Accepted logging levels.
const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Folio configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FolioConfig {
    /// Supported locales.
    #[serde(default)]
    pub locales: LocalesConfig,
    /// Optional remote store connection.
    #[serde(default)]
    pub remote: RemoteConfig,
    /// Remote relation names.
    #[serde(default)]
    pub tables: TablesConfig,
    /// Logging defaults for the operator binary.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Path the config was loaded from, if any (not serialized).
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl FolioConfig {
    /// Loads configuration using the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, |name| env::var(name).ok())
    }

    /// Loads configuration with an explicit environment lookup.
    ///
    /// Resolution order: explicit path, then [`CONFIG_ENV_VAR`], then
    /// `./folio.toml` when present, else built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an explicitly named file is missing, or
    /// when loading or validation fails.
    pub fn load_with_env<F>(path: Option<&Path>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match resolve_path(path, &lookup)? {
            Some(resolved) => Self::from_file(&resolved)?,
            None => Self::default(),
        };
        config.apply_env(&lookup);
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a config file without applying the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        validate_path(path)?;
        let bytes = fs::read(path).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let mut config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Applies remote connection overrides from the environment.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(REMOTE_URL_ENV_VAR) {
            self.remote.url = Some(url);
        }
        if let Some(read_key) = lookup(REMOTE_READ_KEY_ENV_VAR) {
            self.remote.read_key = Some(read_key);
        }
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.locale_set()?;
        self.remote.validate()?;
        self.tables.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Returns the configured locale set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the locale settings are invalid.
    pub fn locale_set(&self) -> Result<LocaleSet, ConfigError> {
        LocaleSet::parse(&self.locales.default, &self.locales.supported)
            .map_err(|err| ConfigError::Invalid(format!("locales: {err}")))
    }

    /// Returns the remote connection descriptor when the remote is configured.
    #[must_use]
    pub fn remote_descriptor(&self) -> Option<HttpStoreConfig> {
        self.remote.descriptor()
    }

    /// Returns true when both remote connection values are present.
    #[must_use]
    pub fn is_remote_configured(&self) -> bool {
        self.remote.descriptor().is_some()
    }
}

/// Locale configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalesConfig {
    /// Default locale code.
    #[serde(default = "default_locale")]
    pub default: String,
    /// Supported locale codes in declared order.
    #[serde(default = "default_supported_locales")]
    pub supported: Vec<String>,
}

impl Default for LocalesConfig {
    fn default() -> Self {
        Self {
            default: default_locale(),
            supported: default_supported_locales(),
        }
    }
}

/// Remote store connection settings.
///
/// # Invariants
/// - `url` and `read_key` are both optional; the remote is configured only
///   when both are non-empty.
#[derive(Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemoteConfig {
    /// Store base URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Public read key.
    #[serde(default)]
    pub read_key: Option<String>,
    /// Path prefix for table collections.
    #[serde(default = "default_rest_path")]
    pub rest_path: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_remote_timeout_ms")]
    pub timeout_ms: u64,
    /// Maximum response size in bytes.
    #[serde(default = "default_max_response_bytes")]
    pub max_response_bytes: usize,
    /// Allow cleartext HTTP.
    #[serde(default)]
    pub allow_http: bool,
    /// User agent for outbound requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: None,
            read_key: None,
            rest_path: default_rest_path(),
            timeout_ms: default_remote_timeout_ms(),
            max_response_bytes: default_max_response_bytes(),
            allow_http: false,
            user_agent: default_user_agent(),
        }
    }
}

impl fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("url", &self.url)
            .field("read_key", &self.read_key.as_ref().map(|_| "<redacted>"))
            .field("rest_path", &self.rest_path)
            .field("timeout_ms", &self.timeout_ms)
            .field("max_response_bytes", &self.max_response_bytes)
            .field("allow_http", &self.allow_http)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl RemoteConfig {
    /// Returns the non-empty, trimmed URL.
    fn url_value(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|value| !value.is_empty())
    }

    /// Returns the non-empty, trimmed read key.
    fn read_key_value(&self) -> Option<&str> {
        self.read_key.as_deref().map(str::trim).filter(|value| !value.is_empty())
    }

    /// Builds the store descriptor when both connection values are present.
    #[must_use]
    pub fn descriptor(&self) -> Option<HttpStoreConfig> {
        let base_url = self.url_value()?;
        let read_key = self.read_key_value()?;
        Some(HttpStoreConfig {
            base_url: base_url.to_string(),
            read_key: read_key.to_string(),
            rest_path: self.rest_path.clone(),
            timeout_ms: self.timeout_ms,
            max_response_bytes: self.max_response_bytes,
            allow_http: self.allow_http,
            user_agent: self.user_agent.clone(),
        })
    }

    /// Validates remote settings; present values must be well-formed.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_timeout_range(
            "remote.timeout_ms",
            self.timeout_ms,
            MIN_REMOTE_TIMEOUT_MS,
            MAX_REMOTE_TIMEOUT_MS,
        )?;
        if self.max_response_bytes == 0 || self.max_response_bytes > MAX_MAX_RESPONSE_BYTES {
            return Err(ConfigError::Invalid(format!(
                "remote.max_response_bytes must be between 1 and {MAX_MAX_RESPONSE_BYTES}"
            )));
        }
        if !self
            .rest_path
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'/' | b'-' | b'_' | b'.'))
        {
            return Err(ConfigError::Invalid(
                "remote.rest_path contains invalid characters".to_string(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::Invalid("remote.user_agent must be non-empty".to_string()));
        }
        if let Some(base_url) = self.url_value() {
            let candidate = HttpStoreConfig {
                base_url: base_url.to_string(),
                rest_path: self.rest_path.clone(),
                allow_http: self.allow_http,
                ..HttpStoreConfig::default()
            };
            candidate.endpoint().map_err(|err| ConfigError::Invalid(format!("remote.url: {err}")))?;
        }
        Ok(())
    }
}

/// Remote relation names.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TablesConfig {
    /// Translation override relation.
    #[serde(default = "default_translations_table")]
    pub translations: String,
    /// Article relation.
    #[serde(default = "default_articles_table")]
    pub articles: String,
    /// Project relation.
    #[serde(default = "default_projects_table")]
    pub projects: String,
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            translations: default_translations_table(),
            articles: default_articles_table(),
            projects: default_projects_table(),
        }
    }
}

impl TablesConfig {
    /// Validates relation names as plain identifiers.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_table_name("tables.translations", &self.translations)?;
        validate_table_name("tables.articles", &self.articles)?;
        validate_table_name("tables.projects", &self.projects)?;
        Ok(())
    }
}

/// Logging defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default level filter when `FOLIO_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    /// Validates the level name.
    fn validate(&self) -> Result<(), ConfigError> {
        let level = self.level.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "logging.level must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default locale code.
fn default_locale() -> String {
    "en".to_string()
}

/// Default supported locale codes.
fn default_supported_locales() -> Vec<String> {
    vec!["en".to_string(), "ro".to_string()]
}

/// Default REST path prefix.
fn default_rest_path() -> String {
    DEFAULT_REST_PATH.to_string()
}

/// Default remote request timeout in milliseconds.
const fn default_remote_timeout_ms() -> u64 {
    DEFAULT_REMOTE_TIMEOUT_MS
}

/// Default remote response size cap.
const fn default_max_response_bytes() -> usize {
    DEFAULT_MAX_RESPONSE_BYTES
}

/// Default outbound user agent.
fn default_user_agent() -> String {
    HttpStoreConfig::default().user_agent
}

/// Default translation relation name.
fn default_translations_table() -> String {
    "translations".to_string()
}

/// Default article relation name.
fn default_articles_table() -> String {
    "articles".to_string()
}

/// Default project relation name.
fn default_projects_table() -> String {
    "projects".to_string()
}

/// Default logging level.
fn default_log_level() -> String {
    "info".to_string()
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from the argument, environment, or working directory.
///
/// Returns `None` when no config file is named and none exists at the default location.
fn resolve_path<F>(path: Option<&Path>, lookup: &F) -> Result<Option<PathBuf>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = path {
        return Ok(Some(path.to_path_buf()));
    }
    if let Some(env_path) = lookup(CONFIG_ENV_VAR).filter(|value| !value.trim().is_empty()) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(Some(PathBuf::from(env_path)));
    }
    let default_path = PathBuf::from(DEFAULT_CONFIG_NAME);
    if default_path.is_file() {
        return Ok(Some(default_path));
    }
    Ok(None)
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a timeout value against bounds.
fn validate_timeout_range(
    field: &str,
    value_ms: u64,
    min_ms: u64,
    max_ms: u64,
) -> Result<(), ConfigError> {
    if value_ms < min_ms || value_ms > max_ms {
        return Err(ConfigError::Invalid(format!(
            "{field} must be between {min_ms} and {max_ms} milliseconds",
        )));
    }
    Ok(())
}

/// Validates a relation name as a plain identifier.
fn validate_table_name(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() || value.len() > MAX_TABLE_NAME_LENGTH {
        return Err(ConfigError::Invalid(format!(
            "{field} must be 1 to {MAX_TABLE_NAME_LENGTH} characters"
        )));
    }
    if !value.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        return Err(ConfigError::Invalid(format!(
            "{field} must contain only ascii letters, digits, and underscores"
        )));
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
