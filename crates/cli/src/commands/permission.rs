//! Permission commands

use clap::{Args, Subcommand};
use tms_core::PermissionApi;

use super::{connect, fail};
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Permission subcommands
#[derive(Subcommand, Debug)]
pub enum PermissionCommands {
    /// List permissions
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Server profile name
    pub server: String,

    /// Only list permission names
    #[arg(long)]
    pub names: bool,
}

/// Execute a permission subcommand
pub async fn execute(cmd: PermissionCommands, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    match cmd {
        PermissionCommands::List(args) => {
            let client = match connect(&args.server, &formatter) {
                Ok(client) => client,
                Err(code) => return code,
            };
            if args.names {
                list_names(client.permissions(), &formatter).await
            } else {
                list(client.permissions(), &formatter).await
            }
        }
    }
}

async fn list(api: &dyn PermissionApi, formatter: &Formatter) -> ExitCode {
    match api.get_all().await {
        Ok(permissions) => {
            if formatter.is_json() {
                formatter.json(&permissions);
            } else {
                let rows = permissions
                    .iter()
                    .map(|p| {
                        vec![
                            p.name.clone(),
                            p.display_name.clone().unwrap_or_default(),
                            p.scope.clone().unwrap_or_default(),
                        ]
                    })
                    .collect();
                formatter.table(&["Name", "Display name", "Scope"], rows);
            }
            ExitCode::Success
        }
        Err(e) => fail(formatter, "list permissions", &e),
    }
}

async fn list_names(api: &dyn PermissionApi, formatter: &Formatter) -> ExitCode {
    match api.get_permission_names().await {
        Ok(names) => {
            if formatter.is_json() {
                formatter.json(&names);
            } else {
                for name in &names {
                    formatter.println(&name.name);
                }
            }
            ExitCode::Success
        }
        Err(e) => fail(formatter, "list permission names", &e),
    }
}
