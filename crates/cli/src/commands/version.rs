//! Language file version commands

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;
use tms_core::FileVersionApi;

use super::{connect, fail, write_file};
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig, Spinner, format_size, format_timestamp};

/// Version subcommands
#[derive(Subcommand, Debug)]
pub enum VersionCommands {
    /// List the versions of a language file
    List(ListArgs),

    /// Download one version of a language file
    Download(DownloadArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Server profile name
    pub server: String,

    /// Language file id
    pub language_file_id: String,
}

#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Server profile name
    pub server: String,

    /// Project id
    pub project_id: String,

    /// Language file id
    pub language_file_id: String,

    /// Version number; defaults to the latest
    #[arg(long = "file-version", value_name = "N")]
    pub file_version: Option<u32>,

    /// Output file
    #[arg(short, long)]
    pub output: PathBuf,
}

#[derive(Debug, Serialize)]
struct DownloadOutput {
    language_file_id: String,
    version: u32,
    path: String,
    size_bytes: u64,
}

/// Execute a version subcommand
pub async fn execute(cmd: VersionCommands, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let server = match &cmd {
        VersionCommands::List(args) => &args.server,
        VersionCommands::Download(args) => &args.server,
    };
    let client = match connect(server, &formatter) {
        Ok(client) => client,
        Err(code) => return code,
    };
    let api = client.file_versions();

    match cmd {
        VersionCommands::List(args) => list(api, &args.language_file_id, &formatter).await,
        VersionCommands::Download(args) => download(api, args, &formatter).await,
    }
}

async fn list(api: &dyn FileVersionApi, language_file_id: &str, formatter: &Formatter) -> ExitCode {
    match api.get_file_versions(language_file_id).await {
        Ok(mut versions) => {
            versions.sort_by_key(|v| v.version);
            if formatter.is_json() {
                formatter.json(&versions);
            } else if versions.is_empty() {
                formatter.println("No versions found.");
            } else {
                let rows = versions
                    .iter()
                    .map(|v| {
                        vec![
                            v.version.to_string(),
                            format_timestamp(v.created_at.as_deref()),
                            v.created_by.clone().unwrap_or_default(),
                            v.size.map(format_size).unwrap_or_default(),
                            v.comment.clone().unwrap_or_default(),
                        ]
                    })
                    .collect();
                formatter.table(&["Version", "Created", "By", "Size", "Comment"], rows);
            }
            ExitCode::Success
        }
        Err(e) => fail(formatter, "list versions", &e),
    }
}

/// Requested version, or the highest one the server knows
async fn resolve_version(
    api: &dyn FileVersionApi,
    language_file_id: &str,
    requested: Option<u32>,
) -> tms_core::Result<Option<u32>> {
    if let Some(version) = requested {
        return Ok(Some(version));
    }
    let versions = api.get_file_versions(language_file_id).await?;
    Ok(versions.iter().map(|v| v.version).max())
}

async fn download(api: &dyn FileVersionApi, args: DownloadArgs, formatter: &Formatter) -> ExitCode {
    let version = match resolve_version(api, &args.language_file_id, args.file_version).await {
        Ok(Some(version)) => version,
        Ok(None) => {
            formatter.error(&format!(
                "Language file '{}' has no versions",
                args.language_file_id
            ));
            return ExitCode::NotFound;
        }
        Err(e) => return fail(formatter, "list versions", &e),
    };

    let spinner = Spinner::start(
        formatter.config(),
        &format!("Downloading version {version}..."),
    );
    let result = api
        .download_file_version(&args.project_id, &args.language_file_id, version)
        .await;
    spinner.finish();

    let bytes = match result {
        Ok(bytes) => bytes,
        Err(e) => return fail(formatter, "download version", &e),
    };
    if let Err(e) = write_file(&args.output, &bytes) {
        formatter.error(&format!("{e:#}"));
        return ExitCode::GeneralError;
    }

    if formatter.is_json() {
        formatter.json(&DownloadOutput {
            language_file_id: args.language_file_id,
            version,
            path: args.output.display().to_string(),
            size_bytes: bytes.len() as u64,
        });
    } else {
        formatter.success(&format!(
            "Saved version {version} ({}) to {}",
            format_size(bytes.len() as u64),
            args.output.display()
        ));
    }
    ExitCode::Success
}
