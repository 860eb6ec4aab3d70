//! File version client
//!
//! Version history, editor settings and the check-out/check-in cycle of a
//! single language file.

use std::sync::Arc;

use async_trait::async_trait;
use tms_core::ensure::not_empty;
use tms_core::models::{EditorProfile, FileVersion, OnlineCheckout, ProjectSettings};
use tms_core::{FileVersionApi, Result, urls};

use crate::connection::{ApiConnection, RequestBody};

/// Client for the file version and editor endpoints
#[derive(Debug, Clone)]
pub struct FileVersionClient {
    connection: Arc<ApiConnection>,
}

impl FileVersionClient {
    pub fn new(connection: Arc<ApiConnection>) -> Self {
        Self { connection }
    }
}

fn ensure_file(project_id: &str, language_file_id: &str) -> Result<()> {
    not_empty(project_id, "projectId")?;
    not_empty(language_file_id, "languageFileId")
}

#[async_trait]
impl FileVersionApi for FileVersionClient {
    async fn get_file_versions(&self, language_file_id: &str) -> Result<Vec<FileVersion>> {
        not_empty(language_file_id, "languageFileId")?;
        self.connection
            .get_all(&urls::file_versions(language_file_id), &[])
            .await
    }

    async fn download_file_version(
        &self,
        project_id: &str,
        language_file_id: &str,
        version: u32,
    ) -> Result<Vec<u8>> {
        ensure_file(project_id, language_file_id)?;
        self.connection
            .get_bytes(
                &urls::download_file_version(project_id, language_file_id, version),
                &[],
            )
            .await
    }

    async fn project_settings(
        &self,
        project_id: &str,
        language_file_id: &str,
    ) -> Result<ProjectSettings> {
        ensure_file(project_id, language_file_id)?;
        self.connection
            .get_json(&urls::project_settings(project_id, language_file_id), &[])
            .await
    }

    async fn is_authorized_to_open(
        &self,
        project_id: &str,
        language_file_id: &str,
    ) -> Result<String> {
        ensure_file(project_id, language_file_id)?;
        self.connection
            .get_text(&urls::open_authorization(project_id, language_file_id), &[])
            .await
    }

    async fn editor_profile(
        &self,
        project_id: &str,
        language_file_id: &str,
    ) -> Result<EditorProfile> {
        ensure_file(project_id, language_file_id)?;
        self.connection
            .get_json(&urls::editor_profile(project_id, language_file_id), &[])
            .await
    }

    async fn online_checkout(
        &self,
        project_id: &str,
        language_file_id: &str,
    ) -> Result<OnlineCheckout> {
        ensure_file(project_id, language_file_id)?;
        self.connection
            .post_json(
                &urls::online_checkout(project_id, language_file_id),
                &[],
                RequestBody::Empty,
            )
            .await
    }

    async fn online_checkin(
        &self,
        project_id: &str,
        language_file_id: &str,
    ) -> Result<OnlineCheckout> {
        let checkout = self.online_checkout(project_id, language_file_id).await?;
        tracing::debug!(
            checkout_id = %checkout.online_checkout_id,
            %language_file_id,
            "checking in online checkout"
        );

        self.connection
            .post_json(
                &urls::online_checkin(project_id, language_file_id),
                &[],
                RequestBody::json(&checkout)?,
            )
            .await
    }

    async fn undo_checkout(&self, project_id: &str, language_file_id: &str) -> Result<()> {
        ensure_file(project_id, language_file_id)?;
        self.connection
            .delete(&urls::undo_checkout(project_id, language_file_id), &[])
            .await
    }

    async fn online_checkout_health(&self) -> Result<String> {
        self.connection
            .get_text(&urls::online_checkout_health(), &[])
            .await
    }

    async fn is_checked_out_to_other(&self, language_file_id: &str) -> Result<bool> {
        not_empty(language_file_id, "languageFileId")?;
        let checked_out: Option<bool> = self
            .connection
            .get_json(&urls::checked_out_to_other(language_file_id), &[])
            .await?;
        Ok(checked_out.unwrap_or(false))
    }

    async fn external_checkout(&self, project_id: &str, language_file_id: &str) -> Result<String> {
        ensure_file(project_id, language_file_id)?;
        self.connection
            .post_text(
                &urls::external_checkout(project_id, language_file_id),
                &[],
                RequestBody::Empty,
            )
            .await
    }

    async fn external_checkin(
        &self,
        project_id: &str,
        language_file_id: &str,
        comment: &str,
    ) -> Result<String> {
        self.external_checkout(project_id, language_file_id)
            .await?;

        self.connection
            .post_text(
                &urls::external_checkin(project_id, language_file_id),
                &[],
                RequestBody::json(comment)?,
            )
            .await
    }
}
