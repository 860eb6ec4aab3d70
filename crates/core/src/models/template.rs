//! Project template type definitions

use serde::{Deserialize, Serialize};

/// A project template stored on the server
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectTemplate {
    /// Assigned by the server; absent when creating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
}

impl ProjectTemplate {
    pub fn new(name: impl Into<String>, organization_id: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            organization_id: Some(organization_id.into()),
        }
    }
}
