//! Template client

use std::sync::Arc;

use async_trait::async_trait;
use tms_core::ensure::{not_empty, not_empty_slice};
use tms_core::models::ProjectTemplate;
use tms_core::{Result, TemplateApi, urls};

use crate::connection::{ApiConnection, RequestBody};
use crate::multipart;

/// Client for the project template endpoints
#[derive(Debug, Clone)]
pub struct TemplateClient {
    connection: Arc<ApiConnection>,
}

impl TemplateClient {
    pub fn new(connection: Arc<ApiConnection>) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl TemplateApi for TemplateClient {
    async fn get_all_templates(&self) -> Result<Vec<ProjectTemplate>> {
        self.connection.get_all(&urls::templates(), &[]).await
    }

    async fn get_template(&self, template_id: &str) -> Result<String> {
        not_empty(template_id, "templateId")?;
        self.connection
            .get_text(&urls::template(template_id), &[])
            .await
    }

    async fn create_template(&self, template: &ProjectTemplate, raw_data: &[u8]) -> Result<String> {
        not_empty(&template.name, "name")?;
        not_empty_slice(raw_data, "rawData")?;

        let template_id = self
            .connection
            .post_created(&urls::templates(), RequestBody::json(template)?)
            .await?;
        tracing::debug!(%template_id, name = %template.name, "template created");

        self.upload_template(&template_id, raw_data, &template.name)
            .await?;
        Ok(template_id)
    }

    async fn upload_template(
        &self,
        template_id: &str,
        raw_data: &[u8],
        template_name: &str,
    ) -> Result<String> {
        not_empty(template_id, "templateId")?;
        not_empty(template_name, "templateName")?;
        not_empty_slice(raw_data, "rawData")?;

        let form = multipart::guessed_form("file", raw_data, template_name)?;
        self.connection
            .post_multipart(&urls::upload_template(template_id), form)
            .await
    }

    async fn delete_template(&self, template_id: &str) -> Result<()> {
        not_empty(template_id, "templateId")?;
        self.connection
            .delete(&urls::template(template_id), &[])
            .await
    }
}
