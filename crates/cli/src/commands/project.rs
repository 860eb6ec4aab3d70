//! Project commands
//!
//! Listing, inspection, status changes, creation and downloads of projects.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use futures::future::join_all;
use serde::Serialize;
use tms_core::ProjectApi;
use tms_core::models::{
    ChangeStatusRequest, CreateProjectRequest, FileDownloadRequest, FileDownloadType,
    ProjectDetails, ProjectFilter, ProjectStatus, ProjectsRequest, SortDirection, SortParameters,
    SortProperty,
};

use super::{connect, fail, read_file, write_file};
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig, Spinner, format_size, format_timestamp};

/// Project subcommands
#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// List projects
    List(ListArgs),

    /// Show project details
    Get(ProjectArgs),

    /// List the files of a project
    Files(ProjectArgs),

    /// List the workflow phases of a project
    Phases(PhasesArgs),

    /// Show word statistics per file or per language
    Stats(StatsArgs),

    /// Show the publishing status of one or more projects
    Status(StatusArgs),

    /// Change the status of a project
    SetStatus(SetStatusArgs),

    /// Create a project from a zip of source files or a project package
    Create(CreateArgs),

    /// Delete a project
    Delete(ProjectArgs),

    /// Download project files
    Download(DownloadArgs),
}

/// Arguments for the `project list` command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Server profile name
    pub server: String,

    /// Only projects whose name contains this text
    #[arg(long)]
    pub name: Option<String>,

    /// Organization path to list
    #[arg(long, default_value = "/")]
    pub org_path: String,

    /// Do not include sub-organizations
    #[arg(long)]
    pub no_sub_orgs: bool,

    /// Status to include: pending, in-progress, completed, archived (repeatable)
    #[arg(long = "status", value_name = "STATUS")]
    pub statuses: Vec<String>,

    /// 1-based page number
    #[arg(long)]
    pub page: Option<u32>,

    /// Page size
    #[arg(long)]
    pub limit: Option<u32>,

    /// Sort by: name, due, created, org, status
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Only projects of this organization name
    #[arg(long, conflicts_with_all = ["page", "limit"])]
    pub organization: Option<String>,
}

/// Server and project id
#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Server profile name
    pub server: String,

    /// Project id
    pub project_id: String,
}

/// Arguments for the `project phases` command
#[derive(Args, Debug)]
pub struct PhasesArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Show the assignees of this phase
    #[arg(long)]
    pub assignees: Option<String>,
}

/// Arguments for the `project stats` command
#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Aggregate per target language instead of per file
    #[arg(long)]
    pub by_language: bool,
}

/// Arguments for the `project status` command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Server profile name
    pub server: String,

    /// Project ids
    #[arg(required = true)]
    pub project_ids: Vec<String>,
}

/// Arguments for the `project set-status` command
#[derive(Args, Debug)]
pub struct SetStatusArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// New status: started, completed, archived, detached
    pub status: ProjectStatus,

    /// Delete the project TMs when detaching
    #[arg(long)]
    pub delete_tms: bool,
}

/// Arguments for the `project create` command
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Server profile name
    pub server: String,

    /// Project name
    pub name: String,

    /// Zip of source files, or a project package with --package
    pub file: PathBuf,

    /// Owning organization id
    #[arg(long)]
    pub organization_id: String,

    /// Project template id
    #[arg(long)]
    pub template_id: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Due date (ISO 8601)
    #[arg(long)]
    pub due_date: Option<String>,

    /// Publish the file as a project package
    #[arg(long)]
    pub package: bool,
}

/// Arguments for the `project download` command
#[derive(Args, Debug)]
pub struct DownloadArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output file
    #[arg(short, long)]
    pub output: PathBuf,

    /// What to download: all, source, target, native. Every file when omitted.
    #[arg(long = "type")]
    pub file_type: Option<FileDownloadType>,

    /// Download only these language files (repeatable)
    #[arg(long = "file", value_name = "LANGUAGE_FILE_ID", conflicts_with = "file_type")]
    pub language_file_ids: Vec<String>,

    /// Download the native target files of the latest file versions
    #[arg(long, conflicts_with_all = ["file_type", "language_file_ids"])]
    pub native: bool,

    /// Finalize the selected language files before download
    #[arg(long, requires = "language_file_ids")]
    pub finalize: bool,
}

#[derive(Debug, Serialize)]
struct DownloadOutput {
    project_id: String,
    path: String,
    size_bytes: u64,
    size_human: String,
}

#[derive(Debug, Serialize)]
struct CreateOutput {
    project_id: String,
    name: String,
}

/// Execute a project subcommand
pub async fn execute(cmd: ProjectCommands, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let server = match &cmd {
        ProjectCommands::List(args) => &args.server,
        ProjectCommands::Get(args) | ProjectCommands::Files(args) | ProjectCommands::Delete(args) => {
            &args.server
        }
        ProjectCommands::Phases(args) => &args.project.server,
        ProjectCommands::Stats(args) => &args.project.server,
        ProjectCommands::Status(args) => &args.server,
        ProjectCommands::SetStatus(args) => &args.project.server,
        ProjectCommands::Create(args) => &args.server,
        ProjectCommands::Download(args) => &args.project.server,
    };
    let client = match connect(server, &formatter) {
        Ok(client) => client,
        Err(code) => return code,
    };
    let api = client.projects();

    match cmd {
        ProjectCommands::List(args) => list(api, args, &formatter).await,
        ProjectCommands::Get(args) => get(api, &args.project_id, &formatter).await,
        ProjectCommands::Files(args) => files(api, &args.project_id, &formatter).await,
        ProjectCommands::Phases(args) => phases(api, args, &formatter).await,
        ProjectCommands::Stats(args) => stats(api, args, &formatter).await,
        ProjectCommands::Status(args) => status(api, &args.project_ids, &formatter).await,
        ProjectCommands::SetStatus(args) => set_status(api, args, &formatter).await,
        ProjectCommands::Create(args) => create(api, args, &formatter).await,
        ProjectCommands::Delete(args) => delete(api, &args.project_id, &formatter).await,
        ProjectCommands::Download(args) => download(api, args, &formatter).await,
    }
}

/// Fold status names into the filter bitmask; no names means the default mask
fn status_mask(statuses: &[String]) -> Result<u32, String> {
    if statuses.is_empty() {
        return Ok(ProjectFilter::default().status);
    }

    statuses.iter().try_fold(0, |mask, status| {
        let bit = match status.to_lowercase().replace(['-', '_'], "").as_str() {
            "pending" => ProjectFilter::STATUS_PENDING,
            "inprogress" | "started" => ProjectFilter::STATUS_IN_PROGRESS,
            "completed" => ProjectFilter::STATUS_COMPLETED,
            "archived" => ProjectFilter::STATUS_ARCHIVED,
            _ => return Err(format!("Invalid status filter: {status}")),
        };
        Ok(mask | bit)
    })
}

fn status_label(status: i32) -> &'static str {
    match status {
        1 => "pending",
        2 => "in progress",
        4 => "completed",
        8 => "archived",
        _ => "unknown",
    }
}

fn build_list_request(args: &ListArgs) -> Result<ProjectsRequest, String> {
    let mut filter = ProjectFilter::new(
        args.org_path.clone(),
        !args.no_sub_orgs,
        status_mask(&args.statuses)?,
    );
    filter.project_name = args.name.clone();

    let sort = match &args.sort {
        Some(property) => Some(SortParameters {
            property: property.parse::<SortProperty>()?,
            direction: if args.desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            },
        }),
        None => None,
    };

    Ok(ProjectsRequest {
        page: args.page,
        limit: args.limit,
        filter,
        sort,
    })
}

fn project_rows(projects: &[ProjectDetails]) -> Vec<Vec<String>> {
    projects
        .iter()
        .map(|p| {
            vec![
                p.project_id.clone(),
                p.name.clone(),
                p.organization_name.clone().unwrap_or_default(),
                status_label(p.status).to_string(),
                format_timestamp(p.due_date.as_deref()),
            ]
        })
        .collect()
}

const PROJECT_HEADER: [&str; 5] = ["ID", "Name", "Organization", "Status", "Due"];

async fn list(api: &dyn ProjectApi, args: ListArgs, formatter: &Formatter) -> ExitCode {
    let spinner = Spinner::start(formatter.config(), "Listing projects...");

    if let Some(organization) = &args.organization {
        let result = api.get_projects_for_organization(organization).await;
        spinner.finish();
        return match result {
            Ok(projects) => {
                if formatter.is_json() {
                    formatter.json(&projects);
                } else {
                    formatter.table(&PROJECT_HEADER, project_rows(&projects));
                }
                ExitCode::Success
            }
            Err(e) => fail(formatter, "list projects", &e),
        };
    }

    let request = match build_list_request(&args) {
        Ok(request) => request,
        Err(message) => {
            spinner.finish();
            formatter.error(&message);
            return ExitCode::UsageError;
        }
    };

    let result = api.get_projects(&request).await;
    spinner.finish();
    match result {
        Ok(page) => {
            if formatter.is_json() {
                formatter.json(&page);
            } else if page.items.is_empty() {
                formatter.println("No projects found.");
            } else {
                formatter.table(&PROJECT_HEADER, project_rows(&page.items));
                formatter.println(&format!(
                    "Showing {} of {} projects",
                    page.items.len(),
                    page.count
                ));
            }
            ExitCode::Success
        }
        Err(e) => fail(formatter, "list projects", &e),
    }
}

async fn get(api: &dyn ProjectApi, project_id: &str, formatter: &Formatter) -> ExitCode {
    match api.get_project(project_id).await {
        Ok(project) => {
            if formatter.is_json() {
                formatter.json(&project);
            } else {
                let field = |label: &str, value: Option<&str>| {
                    formatter.println(&format!("{label:<14}: {}", value.unwrap_or("-")));
                };
                field("ID", Some(&project.project_id));
                field("Name", Some(&project.name));
                field("Description", project.description.as_deref());
                field("Organization", project.organization_name.as_deref());
                field("Status", Some(status_label(project.status)));
                field("Source", project.source_language.as_deref());
                field("Targets", project.target_languages.as_deref());
                field("Template", project.project_template_id.as_deref());
                field("Created", Some(&format_timestamp(project.created_at.as_deref())));
                field("Due", Some(&format_timestamp(project.due_date.as_deref())));
            }
            ExitCode::Success
        }
        Err(e) => fail(formatter, "get project", &e),
    }
}

async fn files(api: &dyn ProjectApi, project_id: &str, formatter: &Formatter) -> ExitCode {
    match api.get_files(project_id).await {
        Ok(files) => {
            if formatter.is_json() {
                formatter.json(&files);
            } else {
                let rows = files
                    .iter()
                    .map(|f| {
                        vec![
                            f.unique_id.clone(),
                            f.name.clone(),
                            f.file_role.clone().unwrap_or_default(),
                            f.language_code.clone().unwrap_or_default(),
                            f.size.map(format_size).unwrap_or_default(),
                        ]
                    })
                    .collect();
                formatter.table(&["ID", "Name", "Role", "Language", "Size"], rows);
            }
            ExitCode::Success
        }
        Err(e) => fail(formatter, "list files", &e),
    }
}

async fn phases(api: &dyn ProjectApi, args: PhasesArgs, formatter: &Formatter) -> ExitCode {
    let project_id = &args.project.project_id;

    if let Some(phase_id) = &args.assignees {
        return match api.get_phases_with_assignees(project_id, phase_id).await {
            Ok(phases) => {
                if formatter.is_json() {
                    formatter.json(&phases);
                } else {
                    let rows = phases
                        .iter()
                        .flat_map(|phase| {
                            phase.assignees.iter().map(move |a| {
                                vec![
                                    phase.name.clone(),
                                    a.user_name.clone(),
                                    a.display_name.clone().unwrap_or_default(),
                                    format_timestamp(phase.due_date.as_deref()),
                                ]
                            })
                        })
                        .collect();
                    formatter.table(&["Phase", "User", "Display name", "Due"], rows);
                }
                ExitCode::Success
            }
            Err(e) => fail(formatter, "list phase assignees", &e),
        };
    }

    match api.get_phases(project_id).await {
        Ok(mut phases) => {
            phases.sort_by_key(|p| p.order);
            if formatter.is_json() {
                formatter.json(&phases);
            } else {
                let rows = phases
                    .iter()
                    .map(|p| {
                        vec![
                            p.order.to_string(),
                            p.project_phase_id.clone(),
                            p.name.clone(),
                        ]
                    })
                    .collect();
                formatter.table(&["#", "ID", "Name"], rows);
            }
            ExitCode::Success
        }
        Err(e) => fail(formatter, "list phases", &e),
    }
}

fn percent(part: u64, total: u64) -> String {
    if total == 0 {
        return "-".to_string();
    }
    format!("{:.0}%", part as f64 * 100.0 / total as f64)
}

async fn stats(api: &dyn ProjectApi, args: StatsArgs, formatter: &Formatter) -> ExitCode {
    let project_id = &args.project.project_id;

    if args.by_language {
        return match api.language_statistics(project_id).await {
            Ok(stats) => {
                if formatter.is_json() {
                    formatter.json(&stats);
                } else {
                    let rows = stats
                        .iter()
                        .map(|(language, s)| {
                            vec![
                                language.clone(),
                                s.total_words.to_string(),
                                percent(s.translated_words, s.total_words),
                                percent(s.approved_words, s.total_words),
                                format!("{:.0}%", s.completed_percentage),
                            ]
                        })
                        .collect();
                    formatter.table(
                        &["Language", "Words", "Translated", "Approved", "Complete"],
                        rows,
                    );
                }
                ExitCode::Success
            }
            Err(e) => fail(formatter, "get language statistics", &e),
        };
    }

    match api.file_statistics(project_id).await {
        Ok(stats) => {
            if formatter.is_json() {
                formatter.json(&stats);
            } else {
                let rows = stats
                    .iter()
                    .map(|s| {
                        vec![
                            s.file_name.clone().unwrap_or_else(|| s.language_file_id.clone()),
                            s.language_code.clone().unwrap_or_default(),
                            s.phase_name.clone().unwrap_or_default(),
                            s.total_words.to_string(),
                            percent(s.translated_words, s.total_words),
                        ]
                    })
                    .collect();
                formatter.table(&["File", "Language", "Phase", "Words", "Translated"], rows);
            }
            ExitCode::Success
        }
        Err(e) => fail(formatter, "get file statistics", &e),
    }
}

async fn status(api: &dyn ProjectApi, project_ids: &[String], formatter: &Formatter) -> ExitCode {
    let results = join_all(project_ids.iter().map(|id| api.publishing_status(id))).await;

    let mut exit = ExitCode::Success;
    let mut rows = Vec::new();
    let mut report = Vec::new();
    for (project_id, result) in project_ids.iter().zip(results) {
        match result {
            Ok(status) => {
                rows.push(vec![
                    project_id.clone(),
                    status.status.clone(),
                    status.error_message.clone().unwrap_or_default(),
                ]);
                report.push(serde_json::json!({ "project_id": project_id, "status": status }));
            }
            Err(e) => {
                exit = fail(formatter, &format!("get publishing status of {project_id}"), &e);
            }
        }
    }

    if formatter.is_json() {
        formatter.json(&report);
    } else if !rows.is_empty() {
        formatter.table(&["Project", "Status", "Error"], rows);
    }
    exit
}

async fn set_status(api: &dyn ProjectApi, args: SetStatusArgs, formatter: &Formatter) -> ExitCode {
    let project_id = args.project.project_id;

    let result = if args.status == ProjectStatus::Detached {
        api.detach_project(&project_id, args.delete_tms).await
    } else {
        let request = ChangeStatusRequest {
            project_id: project_id.clone(),
            status: args.status,
        };
        api.change_project_status(&request).await.map(|_| ())
    };

    match result {
        Ok(()) => {
            formatter.success(&format!("Project '{project_id}' is now {}.", args.status));
            ExitCode::Success
        }
        Err(e) => fail(formatter, "change project status", &e),
    }
}

async fn create(api: &dyn ProjectApi, args: CreateArgs, formatter: &Formatter) -> ExitCode {
    let raw_data = match read_file(&args.file) {
        Ok(data) => data,
        Err(e) => {
            formatter.error(&format!("{e:#}"));
            return ExitCode::UsageError;
        }
    };

    let mut request = CreateProjectRequest::new(args.name, args.organization_id, raw_data);
    request.project_template_id = args.template_id;
    request.description = args.description;
    request.due_date = args.due_date;

    let spinner = Spinner::start(formatter.config(), "Creating project...");
    let result = if args.package {
        api.publish_package(&request).await
    } else {
        api.create_project(&request).await
    };
    spinner.finish();

    match result {
        Ok(project_id) => {
            if formatter.is_json() {
                formatter.json(&CreateOutput {
                    project_id,
                    name: request.name,
                });
            } else {
                formatter.success(&format!("Created project '{}' ({project_id}).", request.name));
            }
            ExitCode::Success
        }
        Err(e) => fail(formatter, "create project", &e),
    }
}

async fn delete(api: &dyn ProjectApi, project_id: &str, formatter: &Formatter) -> ExitCode {
    match api.delete_project(project_id).await {
        Ok(()) => {
            formatter.success(&format!("Deleted project '{project_id}'."));
            ExitCode::Success
        }
        Err(e) => fail(formatter, "delete project", &e),
    }
}

async fn download(api: &dyn ProjectApi, args: DownloadArgs, formatter: &Formatter) -> ExitCode {
    let project_id = args.project.project_id;
    let spinner = Spinner::start(formatter.config(), "Downloading...");

    let result = if args.finalize {
        api.finalize(&project_id, &args.language_file_ids).await
    } else if !args.language_file_ids.is_empty() {
        api.download_files(&project_id, &args.language_file_ids)
            .await
    } else if args.native {
        api.download_native(&project_id).await
    } else {
        let request = FileDownloadRequest::new(project_id.clone(), args.file_type);
        api.download_file(&request).await
    };
    spinner.finish();

    let bytes = match result {
        Ok(bytes) => bytes,
        Err(e) => return fail(formatter, "download project files", &e),
    };

    if let Err(e) = write_file(&args.output, &bytes) {
        formatter.error(&format!("{e:#}"));
        return ExitCode::GeneralError;
    }

    let size = bytes.len() as u64;
    if formatter.is_json() {
        formatter.json(&DownloadOutput {
            project_id,
            path: args.output.display().to_string(),
            size_bytes: size,
            size_human: format_size(size),
        });
    } else {
        formatter.success(&format!(
            "Saved {} to {}",
            format_size(size),
            args.output.display()
        ));
    }
    ExitCode::Success
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tms_core::models::{
        AnalysisReport, AnalysisReportHtml, AuditTrailEntry, ChangeAssignmentRequest,
        ChangePhaseRequest, Dashboard, File, LanguageStatistics, Phase, PhaseWithAssignees,
        Project, ProjectAssignment, ProjectFileStatistics, PublishingStatus, UserAssignment,
    };
    use tms_core::{Error, Result};

    mockall::mock! {
        Projects {}

        #[async_trait]
        impl ProjectApi for Projects {
            async fn get_projects(&self, request: &ProjectsRequest) -> Result<Project>;
            async fn get_all_projects(&self) -> Result<Project>;
            async fn get_projects_for_organization(&self, organization_name: &str) -> Result<Vec<ProjectDetails>>;
            async fn get_project(&self, project_id: &str) -> Result<ProjectDetails>;
            async fn get_files(&self, project_id: &str) -> Result<Vec<File>>;
            async fn get_phases(&self, project_id: &str) -> Result<Vec<Phase>>;
            async fn get_phases_with_assignees(&self, project_id: &str, phase_id: &str) -> Result<Vec<PhaseWithAssignees>>;
            async fn change_phases(&self, project_id: &str, request: &ChangePhaseRequest) -> Result<()>;
            async fn change_assignments(&self, project_id: &str, request: &ChangeAssignmentRequest) -> Result<()>;
            async fn user_assignments(&self) -> Result<Vec<UserAssignment>>;
            async fn project_assignments(&self, project_id: &str, file_ids: &[String]) -> Result<Vec<ProjectAssignment>>;
            async fn create_project(&self, request: &CreateProjectRequest) -> Result<String>;
            async fn upload_files(&self, project_id: &str, raw_data: &[u8], name: &str) -> Result<String>;
            async fn publish_package(&self, request: &CreateProjectRequest) -> Result<String>;
            async fn publishing_status(&self, project_id: &str) -> Result<PublishingStatus>;
            async fn change_project_status(&self, request: &ChangeStatusRequest) -> Result<String>;
            async fn detach_project(&self, project_id: &str, delete_tms: bool) -> Result<()>;
            async fn delete_project(&self, project_id: &str) -> Result<()>;
            async fn download_files(&self, project_id: &str, language_file_ids: &[String]) -> Result<Vec<u8>>;
            async fn download_native(&self, project_id: &str) -> Result<Vec<u8>>;
            async fn finalize(&self, project_id: &str, language_file_ids: &[String]) -> Result<Vec<u8>>;
            async fn download_file(&self, request: &FileDownloadRequest) -> Result<Vec<u8>>;
            async fn file_statistics(&self, project_id: &str) -> Result<Vec<ProjectFileStatistics>>;
            async fn language_statistics(&self, project_id: &str) -> Result<LanguageStatistics>;
            async fn analysis_reports<'a, 'b, 'c>(&'a self, project_id: &'b str, language_code: Option<&'c str>) -> Result<Vec<AnalysisReport>>;
            async fn analysis_reports_html<'a, 'b, 'c>(&'a self, project_id: &'b str, language_code: Option<&'c str>) -> Result<Vec<AnalysisReportHtml>>;
            async fn dashboard(&self) -> Result<Dashboard>;
            async fn audit_trail(&self, project_id: &str) -> Result<Vec<AuditTrailEntry>>;
        }
    }

    fn quiet() -> Formatter {
        Formatter::new(OutputConfig {
            quiet: true,
            ..Default::default()
        })
    }

    fn project_args() -> ProjectArgs {
        ProjectArgs {
            server: "prod".to_string(),
            project_id: "p1".to_string(),
        }
    }

    fn download_args(output: PathBuf) -> DownloadArgs {
        DownloadArgs {
            project: project_args(),
            output,
            file_type: None,
            language_file_ids: Vec::new(),
            native: false,
            finalize: false,
        }
    }

    fn not_found() -> Error {
        Error::Api {
            status: 404,
            message: "no such project".into(),
        }
    }

    fn list_args() -> ListArgs {
        ListArgs {
            server: "prod".to_string(),
            name: None,
            org_path: "/".to_string(),
            no_sub_orgs: false,
            statuses: Vec::new(),
            page: None,
            limit: None,
            sort: None,
            desc: false,
            organization: None,
        }
    }

    #[test]
    fn test_status_mask_default() {
        assert_eq!(status_mask(&[]).unwrap(), 7);
    }

    #[test]
    fn test_status_mask_combines() {
        let statuses = vec!["completed".to_string(), "Archived".to_string()];
        assert_eq!(status_mask(&statuses).unwrap(), 12);

        let statuses = vec!["in-progress".to_string()];
        assert_eq!(status_mask(&statuses).unwrap(), 2);
    }

    #[test]
    fn test_status_mask_rejects_unknown() {
        assert!(status_mask(&["paused".to_string()]).is_err());
    }

    #[test]
    fn test_build_list_request() {
        let mut args = list_args();
        args.name = Some("Andrea".to_string());
        args.no_sub_orgs = true;
        args.page = Some(3);
        args.limit = Some(25);
        args.sort = Some("due".to_string());
        args.desc = true;

        let request = build_list_request(&args).unwrap();
        assert_eq!(request.filter.project_name.as_deref(), Some("Andrea"));
        assert!(!request.filter.include_sub_orgs);
        assert_eq!(request.page, Some(3));
        let sort = request.sort.unwrap();
        assert_eq!(sort.property, SortProperty::DueDate);
        assert_eq!(sort.direction, SortDirection::Desc);
    }

    #[test]
    fn test_build_list_request_bad_sort() {
        let mut args = list_args();
        args.sort = Some("size".to_string());
        assert!(build_list_request(&args).is_err());
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(50, 200), "25%");
        assert_eq!(percent(0, 0), "-");
    }

    #[test]
    fn test_project_rows() {
        let project = ProjectDetails {
            project_id: "p1".to_string(),
            name: "Andrea".to_string(),
            status: 4,
            ..Default::default()
        };
        let rows = project_rows(&[project]);
        assert_eq!(rows[0][0], "p1");
        assert_eq!(rows[0][3], "completed");
        assert_eq!(rows[0][4], "-");
    }

    #[tokio::test]
    async fn test_set_status_detached_goes_through_detach() {
        let mut api = MockProjects::new();
        api.expect_detach_project()
            .withf(|project, delete_tms| project == "p1" && *delete_tms)
            .times(1)
            .returning(|_, _| Ok(()));
        api.expect_change_project_status().never();

        let args = SetStatusArgs {
            project: project_args(),
            status: ProjectStatus::Detached,
            delete_tms: true,
        };
        assert_eq!(set_status(&api, args, &quiet()).await, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_set_status_completed_changes_status() {
        let mut api = MockProjects::new();
        api.expect_change_project_status()
            .withf(|request| request.project_id == "p1" && request.status == ProjectStatus::Completed)
            .times(1)
            .returning(|_| Ok(String::new()));
        api.expect_detach_project().never();

        let args = SetStatusArgs {
            project: project_args(),
            status: ProjectStatus::Completed,
            delete_tms: false,
        };
        assert_eq!(set_status(&api, args, &quiet()).await, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_download_without_type_requests_all_files() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("p1.zip");

        let mut api = MockProjects::new();
        api.expect_download_file()
            .withf(|request| request.project_id == "p1" && request.path_segment() == "all")
            .times(1)
            .returning(|_| Ok(b"PK".to_vec()));

        let code = download(&api, download_args(output.clone()), &quiet()).await;
        assert_eq!(code, ExitCode::Success);
        assert_eq!(std::fs::read(output).unwrap(), b"PK");
    }

    #[tokio::test]
    async fn test_download_native_type_uses_download_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = download_args(dir.path().join("native.zip"));
        args.file_type = Some(FileDownloadType::TargetNativeFiles);

        let mut api = MockProjects::new();
        api.expect_download_file()
            .withf(|request| request.file_type == Some(FileDownloadType::TargetNativeFiles))
            .times(1)
            .returning(|_| Ok(b"PK".to_vec()));
        api.expect_download_native().never();

        assert_eq!(download(&api, args, &quiet()).await, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_download_native_flag() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = download_args(dir.path().join("native.zip"));
        args.native = true;

        let mut api = MockProjects::new();
        api.expect_download_native()
            .withf(|project| project == "p1")
            .times(1)
            .returning(|_| Ok(b"PK".to_vec()));
        api.expect_download_file().never();

        assert_eq!(download(&api, args, &quiet()).await, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_download_selected_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = download_args(dir.path().join("files.zip"));
        args.language_file_ids = vec!["lf1".to_string(), "lf2".to_string()];

        let mut api = MockProjects::new();
        api.expect_download_files()
            .withf(|project, ids| project == "p1" && ids.len() == 2 && ids[1] == "lf2")
            .times(1)
            .returning(|_, _| Ok(b"PK".to_vec()));
        api.expect_finalize().never();
        api.expect_download_file().never();

        assert_eq!(download(&api, args, &quiet()).await, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_download_finalize() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = download_args(dir.path().join("final.zip"));
        args.language_file_ids = vec!["lf1".to_string()];
        args.finalize = true;

        let mut api = MockProjects::new();
        api.expect_finalize()
            .withf(|project, ids| project == "p1" && ids.len() == 1 && ids[0] == "lf1")
            .times(1)
            .returning(|_, _| Ok(b"PK".to_vec()));
        api.expect_download_files().never();

        assert_eq!(download(&api, args, &quiet()).await, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_download_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("p1.zip");

        let mut api = MockProjects::new();
        api.expect_download_file().returning(|_| Err(not_found()));

        let code = download(&api, download_args(output.clone()), &quiet()).await;
        assert_eq!(code, ExitCode::NotFound);
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_status_reports_failed_lookup() {
        let mut api = MockProjects::new();
        api.expect_publishing_status()
            .withf(|project| project == "p1")
            .times(1)
            .returning(|_| {
                Ok(PublishingStatus {
                    status: "Published".to_string(),
                    ..Default::default()
                })
            });
        api.expect_publishing_status()
            .withf(|project| project == "p2")
            .times(1)
            .returning(|_| Err(not_found()));

        let ids = vec!["p1".to_string(), "p2".to_string()];
        assert_eq!(status(&api, &ids, &quiet()).await, ExitCode::NotFound);
    }

    #[tokio::test]
    async fn test_status_all_published() {
        let mut api = MockProjects::new();
        api.expect_publishing_status()
            .times(2)
            .returning(|_| Ok(PublishingStatus::default()));

        let ids = vec!["p1".to_string(), "p2".to_string()];
        assert_eq!(status(&api, &ids, &quiet()).await, ExitCode::Success);
    }

    #[test]
    fn test_download_flags_conflict() {
        use clap::Parser;

        let parse = |args: &[&str]| {
            let mut argv = vec!["tms", "project", "download", "prod", "p1", "-o", "out.zip"];
            argv.extend_from_slice(args);
            crate::commands::Cli::try_parse_from(argv)
        };
        assert!(parse(&["--native"]).is_ok());
        assert!(parse(&["--type", "native"]).is_ok());
        assert!(parse(&["--native", "--type", "source"]).is_err());
        assert!(parse(&["--native", "--file", "lf1"]).is_err());
        assert!(parse(&["--finalize"]).is_err());
    }
}
