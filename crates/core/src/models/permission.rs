//! Permission type definitions

use serde::{Deserialize, Serialize};

/// A permission that can be granted through a role
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Permission {
    #[serde(default)]
    pub unique_id: Option<String>,

    pub name: String,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Resource the permission applies to
    #[serde(default)]
    pub scope: Option<String>,
}

/// Name and display name of a permission
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PermissionName {
    pub name: String,

    #[serde(default)]
    pub display_name: Option<String>,
}
