//! Project template commands

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;
use tms_core::TemplateApi;
use tms_core::models::ProjectTemplate;

use super::{connect, fail, read_file, write_file};
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Template subcommands
#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// List templates
    List(ServerArgs),

    /// Print or save a template document
    Get(GetArgs),

    /// Create a template from a document
    Create(CreateArgs),

    /// Delete a template
    Delete(TemplateArgs),
}

#[derive(Args, Debug)]
pub struct ServerArgs {
    /// Server profile name
    pub server: String,
}

#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Server profile name
    pub server: String,

    /// Template id
    pub template_id: String,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    #[command(flatten)]
    pub template: TemplateArgs,

    /// Save the document to a file instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Server profile name
    pub server: String,

    /// Template document
    pub file: PathBuf,

    /// Owning organization id
    #[arg(long)]
    pub organization_id: String,

    /// Template name; defaults to the file name
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
struct CreateOutput {
    template_id: String,
    name: String,
}

/// Execute a template subcommand
pub async fn execute(cmd: TemplateCommands, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let server = match &cmd {
        TemplateCommands::List(args) => &args.server,
        TemplateCommands::Get(args) => &args.template.server,
        TemplateCommands::Create(args) => &args.server,
        TemplateCommands::Delete(args) => &args.server,
    };
    let client = match connect(server, &formatter) {
        Ok(client) => client,
        Err(code) => return code,
    };
    let api = client.templates();

    match cmd {
        TemplateCommands::List(_) => list(api, &formatter).await,
        TemplateCommands::Get(args) => get(api, args, &formatter).await,
        TemplateCommands::Create(args) => create(api, args, &formatter).await,
        TemplateCommands::Delete(args) => delete(api, &args.template_id, &formatter).await,
    }
}

async fn list(api: &dyn TemplateApi, formatter: &Formatter) -> ExitCode {
    match api.get_all_templates().await {
        Ok(mut templates) => {
            templates.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            if formatter.is_json() {
                formatter.json(&templates);
            } else if templates.is_empty() {
                formatter.println("No templates found.");
            } else {
                let rows = templates
                    .iter()
                    .map(|t| {
                        vec![
                            t.id.clone().unwrap_or_default(),
                            t.name.clone(),
                            t.description.clone().unwrap_or_default(),
                        ]
                    })
                    .collect();
                formatter.table(&["ID", "Name", "Description"], rows);
            }
            ExitCode::Success
        }
        Err(e) => fail(formatter, "list templates", &e),
    }
}

async fn get(api: &dyn TemplateApi, args: GetArgs, formatter: &Formatter) -> ExitCode {
    let document = match api.get_template(&args.template.template_id).await {
        Ok(document) => document,
        Err(e) => return fail(formatter, "get template", &e),
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = write_file(path, document.as_bytes()) {
                formatter.error(&format!("{e:#}"));
                return ExitCode::GeneralError;
            }
            formatter.success(&format!("Saved template to {}", path.display()));
        }
        None => formatter.println(&document),
    }
    ExitCode::Success
}

/// Template name from the flag, or the document's file name
fn template_name(args: &CreateArgs) -> Option<String> {
    args.name.clone().or_else(|| {
        args.file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    })
}

async fn create(api: &dyn TemplateApi, args: CreateArgs, formatter: &Formatter) -> ExitCode {
    let raw_data = match read_file(&args.file) {
        Ok(data) => data,
        Err(e) => {
            formatter.error(&format!("{e:#}"));
            return ExitCode::UsageError;
        }
    };

    let mut template =
        ProjectTemplate::new(template_name(&args).unwrap_or_default(), &args.organization_id);
    template.description = args.description;

    match api.create_template(&template, &raw_data).await {
        Ok(template_id) => {
            if formatter.is_json() {
                formatter.json(&CreateOutput {
                    template_id,
                    name: template.name,
                });
            } else {
                formatter.success(&format!(
                    "Created template '{}' ({template_id}).",
                    template.name
                ));
            }
            ExitCode::Success
        }
        Err(e) => fail(formatter, "create template", &e),
    }
}

async fn delete(api: &dyn TemplateApi, template_id: &str, formatter: &Formatter) -> ExitCode {
    match api.delete_template(template_id).await {
        Ok(()) => {
            formatter.success(&format!("Deleted template '{template_id}'."));
            ExitCode::Success
        }
        Err(e) => fail(formatter, "delete template", &e),
    }
}
