//! CLI command definitions and execution
//!
//! Every command resolves a server profile, builds a client and hands the
//! relevant resource API to a handler. Handlers take the API traits so they
//! can run against mocks.

use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tms_core::config::{ColorMode, Defaults, OutputFormat};
use tms_core::{ConfigManager, Error, ServerManager};
use tms_http::TmsClient;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

mod completions;
mod permission;
mod project;
mod server;
mod template;
mod version;

/// tms - translation-management server client
///
/// Browse and manage projects, templates, file versions and permissions on a
/// translation-management server.
#[derive(Parser, Debug)]
#[command(name = "tms")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human-readable or JSON
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true, default_value = "false")]
    pub no_color: bool,

    /// Disable progress spinners
    #[arg(long, global = true, default_value = "false")]
    pub no_progress: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true, default_value = "false")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage server profiles
    #[command(subcommand)]
    Server(server::ServerCommands),

    /// Browse and manage projects
    #[command(subcommand)]
    Project(project::ProjectCommands),

    /// Manage project templates
    #[command(subcommand)]
    Template(template::TemplateCommands),

    /// Inspect and download language file versions
    #[command(subcommand)]
    Version(version::VersionCommands),

    /// List permissions
    #[command(subcommand)]
    Permission(permission::PermissionCommands),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Execute the CLI command and return an exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let defaults = load_defaults();
    let output_config = output_config(&cli, &defaults);
    if defaults.color == ColorMode::Always && !output_config.no_color {
        console::set_colors_enabled(true);
    }

    match cli.command {
        Commands::Server(cmd) => server::execute(cmd, output_config).await,
        Commands::Project(cmd) => project::execute(cmd, output_config).await,
        Commands::Template(cmd) => template::execute(cmd, output_config).await,
        Commands::Version(cmd) => version::execute(cmd, output_config).await,
        Commands::Permission(cmd) => permission::execute(cmd, output_config).await,
        Commands::Completions(args) => completions::execute(args),
    }
}

/// Flags switch an output feature off even when the config file turns it on
fn output_config(cli: &Cli, defaults: &Defaults) -> OutputConfig {
    OutputConfig {
        json: cli.json || defaults.output == OutputFormat::Json,
        no_color: cli.no_color || defaults.color == ColorMode::Never,
        no_progress: cli.no_progress || !defaults.progress,
        quiet: cli.quiet,
    }
}

fn load_defaults() -> Defaults {
    ConfigManager::new()
        .and_then(|manager| manager.load())
        .map(|config| config.defaults)
        .unwrap_or_else(|e| {
            tracing::debug!(error = %e, "using built-in output defaults");
            Defaults::default()
        })
}

/// Resolve a server profile and build a client for it
pub(crate) fn connect(
    server_name: &str,
    formatter: &Formatter,
) -> std::result::Result<TmsClient, ExitCode> {
    let manager = ServerManager::new().map_err(|e| {
        formatter.error(&format!("Failed to load servers: {e}"));
        ExitCode::from_error(&e)
    })?;

    let server = manager.get(server_name).map_err(|e| {
        match &e {
            Error::ServerNotFound(_) => {
                formatter.error(&format!("Server '{server_name}' not found"));
            }
            _ => formatter.error(&format!("Failed to load servers: {e}")),
        }
        ExitCode::from_error(&e)
    })?;

    TmsClient::new(&server).map_err(|e| {
        formatter.error(&format!("Failed to create client: {e}"));
        ExitCode::from_error(&e)
    })
}

/// Report a failed call and map it to an exit code
pub(crate) fn fail(formatter: &Formatter, action: &str, error: &Error) -> ExitCode {
    tracing::debug!(error = ?error, "{action} failed");
    formatter.error(&format!("Failed to {action}: {error}"));
    ExitCode::from_error(error)
}

/// Read a local file to upload
pub(crate) fn read_file(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Write a downloaded body to a local file, creating parent directories
pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}
