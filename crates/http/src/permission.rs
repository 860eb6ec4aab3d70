//! Permission client

use std::sync::Arc;

use async_trait::async_trait;
use tms_core::models::{Permission, PermissionName};
use tms_core::{PermissionApi, Result, urls};

use crate::connection::ApiConnection;

/// Client for the management permission endpoints
#[derive(Debug, Clone)]
pub struct PermissionClient {
    connection: Arc<ApiConnection>,
}

impl PermissionClient {
    pub fn new(connection: Arc<ApiConnection>) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl PermissionApi for PermissionClient {
    async fn get_all(&self) -> Result<Vec<Permission>> {
        self.connection.get_all(&urls::permissions(), &[]).await
    }

    async fn get_permission_names(&self) -> Result<Vec<PermissionName>> {
        self.connection
            .get_all(&urls::permission_names(), &[])
            .await
    }
}
