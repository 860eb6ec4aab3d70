//! Project client
//!
//! Implements `ProjectApi` on top of `ApiConnection`.

use std::sync::Arc;

use async_trait::async_trait;
use tms_core::ensure::{not_empty, not_empty_slice};
use tms_core::models::{
    AnalysisReport, AnalysisReportHtml, AuditTrailEntry, ChangeAssignmentRequest,
    ChangePhaseRequest, ChangeStatusRequest, CreateProjectRequest, Dashboard, File,
    FileDownloadRequest, LanguageStatistics, Phase, PhaseWithAssignees, Project,
    ProjectAssignment, ProjectDetails, ProjectFileStatistics, ProjectsRequest, PublishingStatus,
    UserAssignment,
};
use tms_core::urls::{self, Query};
use tms_core::{ProjectApi, Result};

use crate::connection::{ApiConnection, RequestBody};
use crate::multipart;

/// Client for the project endpoints
#[derive(Debug, Clone)]
pub struct ProjectClient {
    connection: Arc<ApiConnection>,
}

impl ProjectClient {
    pub fn new(connection: Arc<ApiConnection>) -> Self {
        Self { connection }
    }

    /// POST the project metadata and return the new project id
    async fn create(&self, request: &CreateProjectRequest) -> Result<String> {
        not_empty(&request.name, "name")?;
        not_empty(&request.organization_id, "organizationId")?;
        not_empty_slice(&request.raw_data, "rawData")?;

        let project_id = self
            .connection
            .post_created(&urls::projects(), RequestBody::json(request)?)
            .await?;
        tracing::debug!(%project_id, name = %request.name, "project created");
        Ok(project_id)
    }
}

fn language_code_query(language_code: Option<&str>) -> Query {
    match language_code {
        Some(code) if !code.trim().is_empty() => {
            vec![("languageCode".to_string(), code.to_string())]
        }
        _ => Vec::new(),
    }
}

#[async_trait]
impl ProjectApi for ProjectClient {
    // ==================== Listing ====================

    async fn get_projects(&self, request: &ProjectsRequest) -> Result<Project> {
        let query = request.to_query()?;
        self.connection.get_json(&urls::projects(), &query).await
    }

    async fn get_all_projects(&self) -> Result<Project> {
        self.connection.get_json(&urls::projects(), &[]).await
    }

    async fn get_projects_for_organization(
        &self,
        organization_name: &str,
    ) -> Result<Vec<ProjectDetails>> {
        not_empty(organization_name, "organizationName")?;

        let page = self.get_all_projects().await?;
        Ok(page
            .items
            .into_iter()
            .filter(|p| p.organization_name.as_deref() == Some(organization_name))
            .collect())
    }

    async fn get_project(&self, project_id: &str) -> Result<ProjectDetails> {
        not_empty(project_id, "projectId")?;
        self.connection
            .get_json(&urls::project(project_id), &[])
            .await
    }

    async fn get_files(&self, project_id: &str) -> Result<Vec<File>> {
        not_empty(project_id, "projectId")?;
        self.connection
            .get_all(&urls::project_files(project_id), &[])
            .await
    }

    async fn get_phases(&self, project_id: &str) -> Result<Vec<Phase>> {
        not_empty(project_id, "projectId")?;
        self.connection
            .get_all(&urls::project_phases(project_id), &[])
            .await
    }

    async fn get_phases_with_assignees(
        &self,
        project_id: &str,
        phase_id: &str,
    ) -> Result<Vec<PhaseWithAssignees>> {
        not_empty(project_id, "projectId")?;
        not_empty(phase_id, "phaseId")?;
        self.connection
            .get_all(&urls::project_phase_assignees(project_id, phase_id), &[])
            .await
    }

    // ==================== Workflow ====================

    async fn change_phases(&self, project_id: &str, request: &ChangePhaseRequest) -> Result<()> {
        not_empty(project_id, "projectId")?;
        not_empty(&request.phase_id, "phaseId")?;
        not_empty_slice(&request.language_file_ids, "languageFileIds")?;

        self.connection
            .post_text(
                &urls::change_phases(project_id),
                &[],
                RequestBody::json(request)?,
            )
            .await?;
        Ok(())
    }

    async fn change_assignments(
        &self,
        project_id: &str,
        request: &ChangeAssignmentRequest,
    ) -> Result<()> {
        not_empty(project_id, "projectId")?;
        not_empty(&request.phase_id, "phaseId")?;
        not_empty_slice(&request.language_file_ids, "languageFileIds")?;

        self.connection
            .post_text(
                &urls::change_assignments(project_id),
                &[],
                RequestBody::json(request)?,
            )
            .await?;
        Ok(())
    }

    async fn user_assignments(&self) -> Result<Vec<UserAssignment>> {
        self.connection
            .get_all(&urls::user_assignments(), &[])
            .await
    }

    async fn project_assignments(
        &self,
        project_id: &str,
        file_ids: &[String],
    ) -> Result<Vec<ProjectAssignment>> {
        not_empty(project_id, "projectId")?;
        self.connection
            .get_all(
                &urls::project_assignments(project_id),
                &urls::file_id_query(file_ids),
            )
            .await
    }

    // ==================== Lifecycle ====================

    async fn create_project(&self, request: &CreateProjectRequest) -> Result<String> {
        let project_id = self.create(request).await?;
        self.upload_files(&project_id, &request.raw_data, &request.name)
            .await?;
        Ok(project_id)
    }

    async fn upload_files(
        &self,
        project_id: &str,
        raw_data: &[u8],
        name: &str,
    ) -> Result<String> {
        not_empty(project_id, "projectId")?;
        not_empty(name, "name")?;

        let form = multipart::file_form("file", raw_data, &format!("{name}.zip"), multipart::ZIP)?;
        self.connection
            .post_multipart(&urls::upload_project_files(project_id), form)
            .await
    }

    async fn publish_package(&self, request: &CreateProjectRequest) -> Result<String> {
        let project_id = self.create(request).await?;

        let form = multipart::guessed_form(&request.name, &request.raw_data, &request.name)?;
        self.connection
            .post_multipart(&urls::publish_package(&project_id), form)
            .await?;
        Ok(project_id)
    }

    async fn publishing_status(&self, project_id: &str) -> Result<PublishingStatus> {
        not_empty(project_id, "projectId")?;
        self.connection
            .get_json(&urls::publishing_status(project_id), &[])
            .await
    }

    async fn change_project_status(&self, request: &ChangeStatusRequest) -> Result<String> {
        not_empty(&request.project_id, "projectId")?;

        let path = urls::change_project_status(&request.project_id, &request.status.to_string());
        self.connection
            .put_text(&path, &[], RequestBody::json(request)?)
            .await
    }

    async fn detach_project(&self, project_id: &str, delete_tms: bool) -> Result<()> {
        not_empty(project_id, "projectId")?;
        let query = vec![("deleteProjectTMs".to_string(), delete_tms.to_string())];
        self.connection
            .delete(&urls::detach_project(project_id), &query)
            .await
    }

    async fn delete_project(&self, project_id: &str) -> Result<()> {
        not_empty(project_id, "projectId")?;
        self.connection
            .delete(&urls::project(project_id), &[])
            .await
    }

    // ==================== Downloads ====================

    async fn download_files(
        &self,
        project_id: &str,
        language_file_ids: &[String],
    ) -> Result<Vec<u8>> {
        not_empty(project_id, "projectId")?;
        not_empty_slice(language_file_ids, "languageFileIds")?;
        self.connection
            .get_bytes(
                &urls::download_files(project_id),
                &urls::language_file_id_query(language_file_ids),
            )
            .await
    }

    async fn download_native(&self, project_id: &str) -> Result<Vec<u8>> {
        not_empty(project_id, "projectId")?;
        self.connection
            .get_bytes(&urls::download_native(project_id), &[])
            .await
    }

    async fn finalize(&self, project_id: &str, language_file_ids: &[String]) -> Result<Vec<u8>> {
        not_empty(project_id, "projectId")?;
        not_empty_slice(language_file_ids, "languageFileIds")?;
        self.connection
            .post_bytes(
                &urls::finalize(project_id),
                &urls::language_file_id_query(language_file_ids),
                RequestBody::Empty,
            )
            .await
    }

    async fn download_file(&self, request: &FileDownloadRequest) -> Result<Vec<u8>> {
        not_empty(&request.project_id, "projectId")?;
        self.connection
            .get_bytes(
                &urls::download_file(&request.project_id, request.path_segment()),
                &[],
            )
            .await
    }

    // ==================== Reporting ====================

    async fn file_statistics(&self, project_id: &str) -> Result<Vec<ProjectFileStatistics>> {
        not_empty(project_id, "projectId")?;
        self.connection
            .get_all(&urls::file_statistics(project_id), &[])
            .await
    }

    async fn language_statistics(&self, project_id: &str) -> Result<LanguageStatistics> {
        not_empty(project_id, "projectId")?;
        let stats: Option<LanguageStatistics> = self
            .connection
            .get_json(&urls::language_statistics(project_id), &[])
            .await?;
        Ok(stats.unwrap_or_default())
    }

    async fn analysis_reports(
        &self,
        project_id: &str,
        language_code: Option<&str>,
    ) -> Result<Vec<AnalysisReport>> {
        not_empty(project_id, "projectId")?;
        self.connection
            .get_all(
                &urls::analysis_reports(project_id),
                &language_code_query(language_code),
            )
            .await
    }

    async fn analysis_reports_html(
        &self,
        project_id: &str,
        language_code: Option<&str>,
    ) -> Result<Vec<AnalysisReportHtml>> {
        not_empty(project_id, "projectId")?;
        let reports: Option<Vec<AnalysisReportHtml>> = self
            .connection
            .get_json_as(
                &urls::analysis_reports(project_id),
                &language_code_query(language_code),
                "text/html",
            )
            .await?;
        Ok(reports.unwrap_or_default())
    }

    async fn dashboard(&self) -> Result<Dashboard> {
        self.connection.get_json(&urls::dashboard(), &[]).await
    }

    async fn audit_trail(&self, project_id: &str) -> Result<Vec<AuditTrailEntry>> {
        not_empty(project_id, "projectId")?;
        self.connection
            .get_all(&urls::audit_trail(project_id), &[])
            .await
    }
}
