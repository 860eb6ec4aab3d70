//! Project type definitions
//!
//! Data-transfer records for projects, their files, workflow phases,
//! assignments and statistics. Field names follow the server's PascalCase
//! JSON. Optional fields default so partial payloads still decode.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One page of the project listing
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Project {
    /// Total number of projects matching the request
    #[serde(default)]
    pub count: u64,

    /// Projects on this page
    #[serde(default)]
    pub items: Vec<ProjectDetails>,
}

/// Details of a single project
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectDetails {
    pub project_id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub organization_id: Option<String>,

    #[serde(default)]
    pub organization_name: Option<String>,

    #[serde(default)]
    pub source_language: Option<String>,

    #[serde(default)]
    pub target_languages: Option<String>,

    /// Server status code (pending, in progress, completed, archived)
    #[serde(default)]
    pub status: i32,

    #[serde(default)]
    pub due_date: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub project_template_id: Option<String>,
}

/// A file belonging to a project
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct File {
    pub unique_id: String,

    #[serde(default)]
    pub name: String,

    /// "Source", "Translatable", "Reference", ...
    #[serde(default)]
    pub file_role: Option<String>,

    #[serde(default)]
    pub file_type: Option<String>,

    #[serde(default)]
    pub language_code: Option<String>,

    #[serde(default)]
    pub size: Option<u64>,

    #[serde(default)]
    pub last_modified: Option<String>,
}

/// A workflow phase
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Phase {
    pub project_phase_id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub order: i32,
}

/// A user assigned to a phase
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PhaseAssignee {
    pub user_name: String,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

/// A phase together with the users assigned to it
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PhaseWithAssignees {
    pub project_phase_id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub is_current: bool,

    #[serde(default)]
    pub due_date: Option<String>,

    #[serde(default)]
    pub assignees: Vec<PhaseAssignee>,
}

/// Phase assignments of one language file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectAssignment {
    pub language_file_id: String,

    #[serde(default)]
    pub file_name: Option<String>,

    #[serde(default)]
    pub phases: Vec<PhaseWithAssignees>,
}

/// A file assignment of the current user
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct UserAssignment {
    pub project_id: String,

    #[serde(default)]
    pub project_name: Option<String>,

    #[serde(default)]
    pub language_file_id: Option<String>,

    #[serde(default)]
    pub file_name: Option<String>,

    #[serde(default)]
    pub phase_name: Option<String>,

    #[serde(default)]
    pub due_date: Option<String>,
}

/// Moves language files to another phase
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ChangePhaseRequest {
    pub phase_id: String,

    pub language_file_ids: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Reassigns language files within a phase
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeAssignmentRequest {
    pub phase_id: String,

    pub language_file_ids: Vec<String>,

    pub assignees: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Creates a project from a package or a zip of source files
///
/// `raw_data` is never part of the JSON body; it is uploaded as multipart
/// once the project exists.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CreateProjectRequest {
    pub name: String,

    pub organization_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_template_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    #[serde(skip)]
    pub raw_data: Vec<u8>,
}

impl CreateProjectRequest {
    pub fn new(
        name: impl Into<String>,
        organization_id: impl Into<String>,
        raw_data: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            organization_id: organization_id.into(),
            raw_data,
            ..Default::default()
        }
    }
}

/// Target status of a status change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Started,
    Completed,
    Archived,
    Detached,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::Started => write!(f, "Started"),
            ProjectStatus::Completed => write!(f, "Completed"),
            ProjectStatus::Archived => write!(f, "Archived"),
            ProjectStatus::Detached => write!(f, "Detached"),
        }
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "started" | "start" => Ok(ProjectStatus::Started),
            "completed" | "complete" => Ok(ProjectStatus::Completed),
            "archived" | "archive" => Ok(ProjectStatus::Archived),
            "detached" | "detach" => Ok(ProjectStatus::Detached),
            _ => Err(format!("Invalid project status: {s}")),
        }
    }
}

/// Changes the status of a project
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeStatusRequest {
    pub project_id: String,

    pub status: ProjectStatus,
}

/// Which files a project download contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FileDownloadType {
    #[default]
    All,
    SourceFiles,
    TargetFiles,
    TargetNativeFiles,
}

impl FileDownloadType {
    /// Path segment used by the download endpoint: the variant name
    pub const fn as_path_segment(self) -> &'static str {
        match self {
            FileDownloadType::All => "All",
            FileDownloadType::SourceFiles => "SourceFiles",
            FileDownloadType::TargetFiles => "TargetFiles",
            FileDownloadType::TargetNativeFiles => "TargetNativeFiles",
        }
    }
}

impl std::str::FromStr for FileDownloadType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "all" => Ok(FileDownloadType::All),
            "source" | "sourcefiles" => Ok(FileDownloadType::SourceFiles),
            "target" | "targetfiles" => Ok(FileDownloadType::TargetFiles),
            "native" | "targetnative" | "targetnativefiles" => {
                Ok(FileDownloadType::TargetNativeFiles)
            }
            _ => Err(format!("Invalid download type: {s}")),
        }
    }
}

/// Downloads the files of a project as one archive
#[derive(Debug, Clone, Default)]
pub struct FileDownloadRequest {
    pub project_id: String,

    /// Defaults to all files when absent
    pub file_type: Option<FileDownloadType>,
}

impl FileDownloadRequest {
    /// Segment the server reads as "every file" when no type is given
    pub const ALL_FILES: &'static str = "all";

    pub fn new(project_id: impl Into<String>, file_type: Option<FileDownloadType>) -> Self {
        Self {
            project_id: project_id.into(),
            file_type,
        }
    }

    pub fn path_segment(&self) -> &'static str {
        match self.file_type {
            Some(file_type) => file_type.as_path_segment(),
            None => Self::ALL_FILES,
        }
    }
}

/// Project listing filter
///
/// `status` is a bitmask of the `STATUS_*` constants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFilter {
    pub org_path: String,

    pub include_sub_orgs: bool,

    pub status: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
}

impl ProjectFilter {
    pub const STATUS_PENDING: u32 = 1;
    pub const STATUS_IN_PROGRESS: u32 = 2;
    pub const STATUS_COMPLETED: u32 = 4;
    pub const STATUS_ARCHIVED: u32 = 8;

    pub fn new(org_path: impl Into<String>, include_sub_orgs: bool, status: u32) -> Self {
        Self {
            org_path: org_path.into(),
            include_sub_orgs,
            status,
            project_name: None,
        }
    }
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self::new(
            "/",
            true,
            Self::STATUS_PENDING | Self::STATUS_IN_PROGRESS | Self::STATUS_COMPLETED,
        )
    }
}

/// Sortable project properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortProperty {
    ProjectName,
    DueDate,
    CreatedAt,
    OrganizationName,
    Status,
}

impl std::str::FromStr for SortProperty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "name" | "projectname" => Ok(SortProperty::ProjectName),
            "due" | "duedate" => Ok(SortProperty::DueDate),
            "created" | "createdat" => Ok(SortProperty::CreatedAt),
            "org" | "organization" | "organizationname" => Ok(SortProperty::OrganizationName),
            "status" => Ok(SortProperty::Status),
            _ => Err(format!("Invalid sort property: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Listing sort order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortParameters {
    pub property: SortProperty,
    pub direction: SortDirection,
}

/// Options for the project listing, sent as query parameters
#[derive(Debug, Clone, Default)]
pub struct ProjectsRequest {
    /// 1-based page number
    pub page: Option<u32>,

    /// Page size
    pub limit: Option<u32>,

    pub filter: ProjectFilter,

    pub sort: Option<SortParameters>,
}

impl ProjectsRequest {
    pub fn new(filter: ProjectFilter) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }

    pub fn sorted(sort: SortParameters) -> Self {
        Self {
            sort: Some(sort),
            ..Default::default()
        }
    }

    /// Encode as query pairs: paging first, then JSON-encoded filter and sort
    pub fn to_query(&self) -> Result<Vec<(String, String)>> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page".to_string(), page.to_string()));
            if let Some(limit) = self.limit {
                let start = u64::from(page.saturating_sub(1)) * u64::from(limit);
                query.push(("start".to_string(), start.to_string()));
            }
        }
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        query.push(("filter".to_string(), serde_json::to_string(&self.filter)?));
        if let Some(sort) = &self.sort {
            query.push(("sort".to_string(), serde_json::to_string(&[sort])?));
        }
        Ok(query)
    }
}

/// Publishing progress of a newly created project
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PublishingStatus {
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub error_message: Option<String>,
}

/// Per-file statistics of a project
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectFileStatistics {
    pub language_file_id: String,

    #[serde(default)]
    pub file_name: Option<String>,

    #[serde(default)]
    pub language_code: Option<String>,

    #[serde(default)]
    pub phase_name: Option<String>,

    #[serde(default)]
    pub total_words: u64,

    #[serde(default)]
    pub translated_words: u64,

    #[serde(default)]
    pub approved_words: u64,
}

/// Per-language statistics of a project
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectStatistics {
    #[serde(default)]
    pub total_words: u64,

    #[serde(default)]
    pub translated_words: u64,

    #[serde(default)]
    pub approved_words: u64,

    #[serde(default)]
    pub completed_percentage: f64,
}

/// Language statistics keyed by language code
pub type LanguageStatistics = BTreeMap<String, ProjectStatistics>;

/// Analysis report of one target language
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct AnalysisReport {
    #[serde(default)]
    pub language_code: Option<String>,

    #[serde(default)]
    pub report: serde_json::Value,
}

/// Analysis report rendered as HTML
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct AnalysisReportHtml {
    #[serde(default)]
    pub language_code: Option<String>,

    #[serde(default)]
    pub report: String,
}

/// Counters shown on the server dashboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Dashboard {
    #[serde(default)]
    pub projects: u64,

    #[serde(default)]
    pub files: u64,

    #[serde(default)]
    pub words: u64,

    #[serde(default)]
    pub overdue_projects: u64,
}

/// One entry of a project's audit trail
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct AuditTrailEntry {
    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub user_name: Option<String>,

    #[serde(default)]
    pub action: String,

    #[serde(default)]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_page_deserialize() {
        let json = r#"{
            "Count": 2,
            "Items": [
                {"ProjectId": "p1", "Name": "Andrea", "OrganizationName": "Root", "Status": 2},
                {"ProjectId": "p2", "Name": "Test"}
            ]
        }"#;
        let page: Project = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 2);
        assert_eq!(page.items[0].name, "Andrea");
        assert_eq!(page.items[0].organization_name.as_deref(), Some("Root"));
        assert_eq!(page.items[1].status, 0);
    }

    #[test]
    fn test_create_project_request_skips_raw_data() {
        let request = CreateProjectRequest::new("Package", "org-1", vec![1, 2, 3]);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["Name"], "Package");
        assert_eq!(json["OrganizationId"], "org-1");
        assert!(json.get("RawData").is_none());
        assert!(json.get("ProjectTemplateId").is_none());
    }

    #[test]
    fn test_project_status_display_and_parse() {
        assert_eq!(ProjectStatus::Completed.to_string(), "Completed");
        assert_eq!(
            "archive".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::Archived
        );
        assert!("paused".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn test_file_download_type_segments() {
        assert_eq!(
            "target-native".parse::<FileDownloadType>().unwrap(),
            FileDownloadType::TargetNativeFiles
        );
        assert_eq!(
            FileDownloadType::SourceFiles.as_path_segment(),
            "SourceFiles"
        );
        assert_eq!(
            FileDownloadType::TargetNativeFiles.as_path_segment(),
            "TargetNativeFiles"
        );
    }

    #[test]
    fn test_download_request_without_type_uses_all() {
        assert_eq!(FileDownloadRequest::new("p1", None).path_segment(), "all");
        assert_eq!(
            FileDownloadRequest::new("p1", Some(FileDownloadType::All)).path_segment(),
            "All"
        );
        assert_eq!(
            FileDownloadRequest::new("p1", Some(FileDownloadType::TargetFiles)).path_segment(),
            "TargetFiles"
        );
    }

    #[test]
    fn test_default_filter_covers_active_statuses() {
        let filter = ProjectFilter::default();
        assert_eq!(filter.org_path, "/");
        assert!(filter.include_sub_orgs);
        assert_eq!(filter.status, 7);
    }

    #[test]
    fn test_projects_request_query() {
        let mut filter = ProjectFilter::new("/", true, 7);
        filter.project_name = Some("Andrea".to_string());
        let request = ProjectsRequest {
            page: Some(2),
            limit: Some(50),
            filter,
            sort: Some(SortParameters {
                property: SortProperty::ProjectName,
                direction: SortDirection::Desc,
            }),
        };

        let query = request.to_query().unwrap();
        let keys: Vec<&str> = query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["page", "start", "limit", "filter", "sort"]);
        assert_eq!(query[1].1, "50");
        assert_eq!(
            query[3].1,
            r#"{"orgPath":"/","includeSubOrgs":true,"status":7,"projectName":"Andrea"}"#
        );
        assert_eq!(query[4].1, r#"[{"property":"ProjectName","direction":"DESC"}]"#);
    }

    #[test]
    fn test_projects_request_query_defaults() {
        let query = ProjectsRequest::default().to_query().unwrap();
        assert_eq!(query.len(), 1);
        assert_eq!(query[0].0, "filter");
    }

    #[test]
    fn test_language_statistics_deserialize() {
        let json = r#"{"de-DE": {"TotalWords": 120, "CompletedPercentage": 50.0}}"#;
        let stats: LanguageStatistics = serde_json::from_str(json).unwrap();
        assert_eq!(stats["de-DE"].total_words, 120);
        assert_eq!(stats["de-DE"].translated_words, 0);
    }
}
