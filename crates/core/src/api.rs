//! Resource API traits
//!
//! One trait per server resource family. The HTTP adapter implements them;
//! the CLI depends only on the traits so it can be exercised with mocks.
//! Every method validates its required arguments before any request is made
//! and fails with `Error::InvalidArgument` otherwise.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    AnalysisReport, AnalysisReportHtml, AuditTrailEntry, ChangeAssignmentRequest,
    ChangePhaseRequest, ChangeStatusRequest, CreateProjectRequest, Dashboard, EditorProfile, File,
    FileDownloadRequest, FileVersion, LanguageStatistics, OnlineCheckout, Permission,
    PermissionName, Phase, PhaseWithAssignees, Project, ProjectAssignment, ProjectDetails,
    ProjectFileStatistics, ProjectSettings, ProjectTemplate, ProjectsRequest, PublishingStatus,
    UserAssignment,
};

/// Project lifecycle, files, assignments and statistics
#[async_trait]
pub trait ProjectApi: Send + Sync {
    // ==================== Listing ====================

    /// List projects matching a filter, one page at a time
    async fn get_projects(&self, request: &ProjectsRequest) -> Result<Project>;

    /// List projects with the server's default filter
    async fn get_all_projects(&self) -> Result<Project>;

    /// Projects owned by the named organization
    async fn get_projects_for_organization(
        &self,
        organization_name: &str,
    ) -> Result<Vec<ProjectDetails>>;

    /// Get project details
    async fn get_project(&self, project_id: &str) -> Result<ProjectDetails>;

    /// List the files of a project
    async fn get_files(&self, project_id: &str) -> Result<Vec<File>>;

    /// List the workflow phases of a project
    async fn get_phases(&self, project_id: &str) -> Result<Vec<Phase>>;

    /// List a phase with its assignees
    async fn get_phases_with_assignees(
        &self,
        project_id: &str,
        phase_id: &str,
    ) -> Result<Vec<PhaseWithAssignees>>;

    // ==================== Workflow ====================

    /// Move language files to another phase
    async fn change_phases(&self, project_id: &str, request: &ChangePhaseRequest) -> Result<()>;

    /// Reassign language files within a phase
    async fn change_assignments(
        &self,
        project_id: &str,
        request: &ChangeAssignmentRequest,
    ) -> Result<()>;

    /// Assignments of the current user across all projects
    async fn user_assignments(&self) -> Result<Vec<UserAssignment>>;

    /// Assignments of selected files in a project
    async fn project_assignments(
        &self,
        project_id: &str,
        file_ids: &[String],
    ) -> Result<Vec<ProjectAssignment>>;

    // ==================== Lifecycle ====================

    /// Create a project and upload its files; returns the new project id
    async fn create_project(&self, request: &CreateProjectRequest) -> Result<String>;

    /// Upload a zip of files into an existing project
    async fn upload_files(&self, project_id: &str, raw_data: &[u8], name: &str)
    -> Result<String>;

    /// Create a project from a project package; returns the new project id
    async fn publish_package(&self, request: &CreateProjectRequest) -> Result<String>;

    /// Publishing progress of a new project
    async fn publishing_status(&self, project_id: &str) -> Result<PublishingStatus>;

    /// Change the status of a project
    async fn change_project_status(&self, request: &ChangeStatusRequest) -> Result<String>;

    /// Detach a project, optionally deleting its project TMs
    async fn detach_project(&self, project_id: &str, delete_tms: bool) -> Result<()>;

    /// Delete a project
    async fn delete_project(&self, project_id: &str) -> Result<()>;

    // ==================== Downloads ====================

    /// Download selected language files as an archive
    async fn download_files(&self, project_id: &str, language_file_ids: &[String])
    -> Result<Vec<u8>>;

    /// Download native target files
    async fn download_native(&self, project_id: &str) -> Result<Vec<u8>>;

    /// Finalize selected language files and download the result
    async fn finalize(&self, project_id: &str, language_file_ids: &[String]) -> Result<Vec<u8>>;

    /// Download project files of one kind
    async fn download_file(&self, request: &FileDownloadRequest) -> Result<Vec<u8>>;

    // ==================== Reporting ====================

    /// Per-file statistics
    async fn file_statistics(&self, project_id: &str) -> Result<Vec<ProjectFileStatistics>>;

    /// Per-language statistics
    async fn language_statistics(&self, project_id: &str) -> Result<LanguageStatistics>;

    /// Analysis reports, optionally for one language
    async fn analysis_reports(
        &self,
        project_id: &str,
        language_code: Option<&str>,
    ) -> Result<Vec<AnalysisReport>>;

    /// Analysis reports rendered as HTML
    async fn analysis_reports_html(
        &self,
        project_id: &str,
        language_code: Option<&str>,
    ) -> Result<Vec<AnalysisReportHtml>>;

    /// Dashboard counters
    async fn dashboard(&self) -> Result<Dashboard>;

    /// Audit trail of a project
    async fn audit_trail(&self, project_id: &str) -> Result<Vec<AuditTrailEntry>>;
}

/// Project templates
#[async_trait]
pub trait TemplateApi: Send + Sync {
    /// List all templates
    async fn get_all_templates(&self) -> Result<Vec<ProjectTemplate>>;

    /// Get the raw template document
    async fn get_template(&self, template_id: &str) -> Result<String>;

    /// Create a template and upload its document; returns the new template id
    async fn create_template(&self, template: &ProjectTemplate, raw_data: &[u8]) -> Result<String>;

    /// Upload a template document
    async fn upload_template(
        &self,
        template_id: &str,
        raw_data: &[u8],
        template_name: &str,
    ) -> Result<String>;

    /// Delete a template
    async fn delete_template(&self, template_id: &str) -> Result<()>;
}

/// File versions, editor sessions and check-in/out
#[async_trait]
pub trait FileVersionApi: Send + Sync {
    /// List the stored versions of a language file
    async fn get_file_versions(&self, language_file_id: &str) -> Result<Vec<FileVersion>>;

    /// Download one version of a language file
    async fn download_file_version(
        &self,
        project_id: &str,
        language_file_id: &str,
        version: u32,
    ) -> Result<Vec<u8>>;

    /// Editor settings of a language file
    async fn project_settings(
        &self,
        project_id: &str,
        language_file_id: &str,
    ) -> Result<ProjectSettings>;

    /// Whether the current user may open the file in the editor
    async fn is_authorized_to_open(&self, project_id: &str, language_file_id: &str)
    -> Result<String>;

    /// Online editor profile of a language file
    async fn editor_profile(&self, project_id: &str, language_file_id: &str)
    -> Result<EditorProfile>;

    /// Check a file out for the online editor
    async fn online_checkout(&self, project_id: &str, language_file_id: &str)
    -> Result<OnlineCheckout>;

    /// Check out, then check the file back in
    async fn online_checkin(&self, project_id: &str, language_file_id: &str)
    -> Result<OnlineCheckout>;

    /// Release an online checkout without saving
    async fn undo_checkout(&self, project_id: &str, language_file_id: &str) -> Result<()>;

    /// Health of the online checkout service
    async fn online_checkout_health(&self) -> Result<String>;

    /// Whether another user holds the checkout
    async fn is_checked_out_to_other(&self, language_file_id: &str) -> Result<bool>;

    /// Check a file out for an external editor
    async fn external_checkout(&self, project_id: &str, language_file_id: &str) -> Result<String>;

    /// Check out externally, then check in with a comment
    async fn external_checkin(
        &self,
        project_id: &str,
        language_file_id: &str,
        comment: &str,
    ) -> Result<String>;
}

/// Permissions
#[async_trait]
pub trait PermissionApi: Send + Sync {
    /// List all permissions
    async fn get_all(&self) -> Result<Vec<Permission>>;

    /// List permission names
    async fn get_permission_names(&self) -> Result<Vec<PermissionName>>;
}
