//! Client aggregate
//!
//! One connection shared by all resource clients of a server.

use std::sync::Arc;

use tms_core::{Result, Server};

use crate::connection::ApiConnection;
use crate::file_version::FileVersionClient;
use crate::permission::PermissionClient;
use crate::project::ProjectClient;
use crate::template::TemplateClient;

/// Entry point for talking to one translation-management server
#[derive(Debug, Clone)]
pub struct TmsClient {
    connection: Arc<ApiConnection>,
    projects: ProjectClient,
    templates: TemplateClient,
    file_versions: FileVersionClient,
    permissions: PermissionClient,
}

impl TmsClient {
    /// Create a client from a server profile
    pub fn new(server: &Server) -> Result<Self> {
        tracing::debug!(server = %server.name, endpoint = %server.endpoint, "creating client");
        Ok(Self::from_connection(ApiConnection::new(server)?))
    }

    /// Create a client around an existing connection
    pub fn from_connection(connection: ApiConnection) -> Self {
        let connection = Arc::new(connection);
        Self {
            projects: ProjectClient::new(Arc::clone(&connection)),
            templates: TemplateClient::new(Arc::clone(&connection)),
            file_versions: FileVersionClient::new(Arc::clone(&connection)),
            permissions: PermissionClient::new(Arc::clone(&connection)),
            connection,
        }
    }

    pub fn connection(&self) -> &ApiConnection {
        &self.connection
    }

    pub fn projects(&self) -> &ProjectClient {
        &self.projects
    }

    pub fn templates(&self) -> &TemplateClient {
        &self.templates
    }

    pub fn file_versions(&self) -> &FileVersionClient {
        &self.file_versions
    }

    pub fn permissions(&self) -> &PermissionClient {
        &self.permissions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_from_server_profile() {
        let server = Server::new("local", "http://localhost:41234").with_token("t0ken");
        let client = TmsClient::new(&server).unwrap();
        assert_eq!(
            client.connection().base_url().as_str(),
            "http://localhost:41234/"
        );
    }

    #[test]
    fn test_client_rejects_bad_endpoint() {
        let server = Server::new("broken", "::not-a-url");
        assert!(TmsClient::new(&server).is_err());
    }
}
