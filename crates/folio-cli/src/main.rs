// crates/folio-cli/src/main.rs
// ============================================================================
// Module: Folio CLI Entry Point
// Description: Command dispatcher for content resolution and config checks.
// Purpose: Let operators see what a page render would resolve, and from where.
// Dependencies: clap, folio-config, folio-content, folio-core, serde_json, thiserror,
// tracing-subscriber
// ============================================================================

//! ## Overview
//! The `folio` binary loads configuration, builds a [`ContentResolver`], and
//! prints resolved messages, articles, and projects as JSON on stdout.
//! Diagnostics and resolution logs go to stderr. A failing remote store never
//! fails a command; only invalid configuration, invalid arguments, and
//! not-found lookups exit non-zero.

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use folio_config::FolioConfig;
use folio_content::ContentResolver;
use folio_content::EntityRepository;
use folio_content::EntitySchema;
use folio_core::Locale;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable overriding the log filter.
const LOG_ENV: &str = "FOLIO_LOG";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "folio", version, disable_help_subcommand = true)]
struct Cli {
    /// Config file path (defaults to `FOLIO_CONFIG`, then ./folio.toml).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the UI message tree for a locale.
    Messages(MessagesCommand),
    /// Article resolution utilities.
    Articles {
        /// Selected article subcommand.
        #[command(subcommand)]
        command: EntityCommand,
    },
    /// Project resolution utilities.
    Projects {
        /// Selected project subcommand.
        #[command(subcommand)]
        command: EntityCommand,
    },
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Arguments for the `messages` command.
#[derive(Args, Debug)]
struct MessagesCommand {
    /// Locale code; unsupported codes resolve as the default locale.
    #[arg(value_name = "LOCALE")]
    locale: String,
    /// Dotted path of a single node to print instead of the full report.
    #[arg(long, value_name = "PATH")]
    path: Option<String>,
}

/// Entity subcommands shared by articles and projects.
#[derive(Subcommand, Debug)]
enum EntityCommand {
    /// List every entity in listing order.
    List,
    /// Look up one entity by public slug.
    Get(EntityGetCommand),
    /// List public slugs for a locale.
    Slugs(EntitySlugsCommand),
    /// List every (locale, slug) path parameter.
    Params,
    /// Show the entities listed before and after a canonical slug.
    Adjacent(EntityAdjacentCommand),
}

/// Arguments for entity `get`.
#[derive(Args, Debug)]
struct EntityGetCommand {
    /// Public slug to match.
    #[arg(value_name = "SLUG")]
    slug: String,
    /// Locale the slug belongs to (defaults to the default locale).
    #[arg(long, value_name = "LOCALE")]
    locale: Option<String>,
}

/// Arguments for entity `slugs`.
#[derive(Args, Debug)]
struct EntitySlugsCommand {
    /// Locale code.
    #[arg(value_name = "LOCALE")]
    locale: String,
}

/// Arguments for entity `adjacent`.
#[derive(Args, Debug)]
struct EntityAdjacentCommand {
    /// Canonical slug.
    #[arg(value_name = "SLUG")]
    slug: String,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate configuration and print the effective summary.
    Validate,
}

/// Effective configuration summary printed by `config validate`.
#[derive(Debug, Serialize)]
struct ConfigSummary {
    /// File the config was read from, if any.
    source: Option<String>,
    /// Default locale code.
    default_locale: String,
    /// Supported locale codes in declared order.
    supported_locales: Vec<String>,
    /// Whether a remote store will be attempted.
    remote_configured: bool,
    /// Relation names.
    tables: Value,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`].
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let config = FolioConfig::load(cli.config.as_deref())
        .map_err(|err| CliError::new(format!("failed to load config: {err}")))?;
    init_logging(std::env::var(LOG_ENV).ok().as_deref(), &config.logging.level);

    let output = match cli.command {
        Commands::Config {
            command: ConfigCommand::Validate,
        } => config_summary(&config)?,
        command => {
            let resolver = ContentResolver::from_config(&config)
                .map_err(|err| CliError::new(format!("failed to build resolver: {err}")))?;
            tracing::debug!(remote = resolver.context().has_remote(), "resolver ready");
            execute(&resolver, &command)?
        }
    };
    write_json(&output)?;
    Ok(ExitCode::SUCCESS)
}

/// Runs a resolution command and returns its JSON output.
fn execute(resolver: &ContentResolver, command: &Commands) -> CliResult<Value> {
    match command {
        Commands::Messages(command) => command_messages(resolver, command),
        Commands::Articles {
            command,
        } => command_entity(&resolver.articles(), command),
        Commands::Projects {
            command,
        } => command_entity(&resolver.projects(), command),
        Commands::Config {
            ..
        } => Err(CliError::new("config commands do not resolve content".to_string())),
    }
}

// ============================================================================
// SECTION: Logging
// ============================================================================

/// Builds the log filter from the environment override or the config level.
fn log_filter(env_value: Option<&str>, default_level: &str) -> EnvFilter {
    env_value
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level))
}

/// Installs the stderr subscriber; a second install is ignored.
fn init_logging(env_value: Option<&str>, default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(env_value, default_level))
        .with_writer(std::io::stderr)
        .try_init();
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Executes the `messages` command.
fn command_messages(resolver: &ContentResolver, command: &MessagesCommand) -> CliResult<Value> {
    let locale = parse_locale(&command.locale)?;
    let report = resolver.messages().build_report(&locale);
    let Some(path) = command.path.as_deref() else {
        return to_json(&report);
    };
    let node = report
        .tree
        .get(path)
        .ok_or_else(|| CliError::new(format!("no message at path `{path}`")))?;
    Ok(json!({
        "path": path,
        "origin": to_json(&report.origin)?,
        "value": to_json(node)?,
    }))
}

/// Executes an entity subcommand.
fn command_entity<E: EntitySchema>(
    repo: &EntityRepository<'_, E>,
    command: &EntityCommand,
) -> CliResult<Value> {
    match command {
        EntityCommand::List => to_json(&repo.list_all()),
        EntityCommand::Get(command) => {
            let locale = command.locale.as_deref().map(parse_locale).transpose()?;
            let entity = repo.get_by_slug(&command.slug, locale.as_ref()).ok_or_else(|| {
                CliError::new(format!("no {} with slug `{}`", E::KIND.as_str(), command.slug))
            })?;
            to_json(&entity)
        }
        EntityCommand::Slugs(command) => {
            let locale = parse_locale(&command.locale)?;
            to_json(&repo.list_slugs_for_locale(&locale))
        }
        EntityCommand::Params => to_json(&repo.list_slug_params()),
        EntityCommand::Adjacent(command) => to_json(&repo.adjacent(&command.slug)),
    }
}

/// Builds the `config validate` summary.
fn config_summary(config: &FolioConfig) -> CliResult<Value> {
    to_json(&ConfigSummary {
        source: config.source.as_ref().map(|path| path.display().to_string()),
        default_locale: config.locales.default.clone(),
        supported_locales: config.locales.supported.clone(),
        remote_configured: config.is_remote_configured(),
        tables: json!({
            "translations": config.tables.translations,
            "articles": config.tables.articles,
            "projects": config.tables.projects,
        }),
    })
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Parses a locale argument.
fn parse_locale(code: &str) -> CliResult<Locale> {
    Locale::parse(code).map_err(|err| CliError::new(format!("invalid locale `{code}`: {err}")))
}

/// Serializes a value for output.
fn to_json<T: Serialize + ?Sized>(value: &T) -> CliResult<Value> {
    serde_json::to_value(value)
        .map_err(|err| CliError::new(format!("failed to serialize output: {err}")))
}

/// Writes pretty JSON to stdout.
fn write_json(value: &Value) -> CliResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::new(format!("failed to serialize output: {err}")))?;
    write_stdout_line(&rendered)
        .map_err(|err| CliError::new(format!("failed to write stdout: {err}")))
}

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
