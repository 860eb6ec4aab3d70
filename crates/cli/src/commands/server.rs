//! Server profile commands
//!
//! A server profile is a named reference to a translation-management server,
//! holding its endpoint and the API token sent with every request.

use clap::Subcommand;
use serde::Serialize;
use tms_core::{Error, Server, ServerManager, TimeoutConfig};

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Server subcommands
#[derive(Subcommand, Debug)]
pub enum ServerCommands {
    /// Add or update a server profile
    Set(SetArgs),

    /// List configured server profiles
    List,

    /// Remove a server profile
    Remove(RemoveArgs),
}

/// Arguments for the `server set` command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Profile name (e.g., "prod", "staging")
    pub name: String,

    /// Server base URL (e.g., "https://tms.example.com")
    pub endpoint: String,

    /// API token sent as a bearer token
    #[arg(long, env = "TMS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Allow insecure TLS connections
    #[arg(long, default_value = "false")]
    pub insecure: bool,

    /// Connection timeout in milliseconds
    #[arg(long)]
    pub connect_timeout_ms: Option<u64>,

    /// Read timeout in milliseconds
    #[arg(long)]
    pub read_timeout_ms: Option<u64>,
}

/// Arguments for the `server remove` command
#[derive(clap::Args, Debug)]
pub struct RemoveArgs {
    /// Name of the profile to remove
    pub name: String,
}

/// Server information for output (without the token)
#[derive(Debug, Serialize)]
struct ServerInfo {
    name: String,
    endpoint: String,
    has_token: bool,
    insecure: bool,
}

impl From<&Server> for ServerInfo {
    fn from(server: &Server) -> Self {
        Self {
            name: server.name.clone(),
            endpoint: server.endpoint.clone(),
            has_token: server.token.is_some(),
            insecure: server.insecure,
        }
    }
}

#[derive(Serialize)]
struct ServerOperationOutput {
    success: bool,
    server: String,
    message: String,
}

/// Execute a server subcommand
pub async fn execute(cmd: ServerCommands, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let manager = match ServerManager::new() {
        Ok(manager) => manager,
        Err(e) => {
            formatter.error(&format!("Failed to load servers: {e}"));
            return ExitCode::from_error(&e);
        }
    };

    match cmd {
        ServerCommands::Set(args) => execute_set(args, &manager, &formatter),
        ServerCommands::List => execute_list(&manager, &formatter),
        ServerCommands::Remove(args) => execute_remove(args, &manager, &formatter),
    }
}

/// Build a profile from the arguments, rejecting unusable endpoints
fn build_server(args: SetArgs) -> Result<Server, Error> {
    tms_core::ensure::not_empty(&args.endpoint, "endpoint")?;

    let mut server = Server::new(args.name, args.endpoint);
    server.token = args.token.filter(|t| !t.trim().is_empty());
    server.insecure = args.insecure;

    if args.connect_timeout_ms.is_some() || args.read_timeout_ms.is_some() {
        let defaults = TimeoutConfig::default();
        server.timeout = Some(TimeoutConfig {
            connect_ms: args.connect_timeout_ms.unwrap_or(defaults.connect_ms),
            read_ms: args.read_timeout_ms.unwrap_or(defaults.read_ms),
        });
    }

    server.validate()?;
    Ok(server)
}

fn execute_set(args: SetArgs, manager: &ServerManager, formatter: &Formatter) -> ExitCode {
    let server = match build_server(args) {
        Ok(server) => server,
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::from_error(&e);
        }
    };
    let name = server.name.clone();

    match manager.set(server) {
        Ok(()) => {
            if formatter.is_json() {
                formatter.json(&ServerOperationOutput {
                    success: true,
                    server: name.clone(),
                    message: format!("Server '{name}' configured successfully"),
                });
            } else {
                formatter.success(&format!("Server '{name}' configured successfully."));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Failed to save server: {e}"));
            ExitCode::from_error(&e)
        }
    }
}

fn execute_list(manager: &ServerManager, formatter: &Formatter) -> ExitCode {
    let servers = match manager.list() {
        Ok(servers) => servers,
        Err(e) => {
            formatter.error(&format!("Failed to load servers: {e}"));
            return ExitCode::from_error(&e);
        }
    };

    let infos: Vec<ServerInfo> = servers.iter().map(ServerInfo::from).collect();
    if formatter.is_json() {
        formatter.json(&serde_json::json!({ "servers": infos }));
    } else if infos.is_empty() {
        formatter.println("No servers configured.");
    } else {
        let rows = infos
            .iter()
            .map(|info| {
                vec![
                    info.name.clone(),
                    info.endpoint.clone(),
                    if info.has_token { "yes" } else { "no" }.to_string(),
                    if info.insecure { "yes" } else { "no" }.to_string(),
                ]
            })
            .collect();
        formatter.table(&["Name", "Endpoint", "Token", "Insecure"], rows);
    }
    ExitCode::Success
}

fn execute_remove(args: RemoveArgs, manager: &ServerManager, formatter: &Formatter) -> ExitCode {
    match manager.remove(&args.name) {
        Ok(()) => {
            if formatter.is_json() {
                formatter.json(&ServerOperationOutput {
                    success: true,
                    server: args.name.clone(),
                    message: format!("Server '{}' removed successfully", args.name),
                });
            } else {
                formatter.success(&format!("Server '{}' removed successfully.", args.name));
            }
            ExitCode::Success
        }
        Err(Error::ServerNotFound(_)) => {
            formatter.error(&format!("Server '{}' not found", args.name));
            ExitCode::NotFound
        }
        Err(e) => {
            formatter.error(&format!("Failed to remove server: {e}"));
            ExitCode::from_error(&e)
        }
    }
}
