//! File version and editor session type definitions

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A stored version of a language file
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct FileVersion {
    pub language_file_id: String,

    pub version: u32,

    #[serde(default)]
    pub file_name: Option<String>,

    #[serde(default)]
    pub created_by: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub size: Option<u64>,

    /// Check-in comment, if any
    #[serde(default)]
    pub comment: Option<String>,
}

/// Editor settings of one language file in a project
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectSettings {
    #[serde(default)]
    pub project_id: Option<String>,

    #[serde(default)]
    pub language_file_id: Option<String>,

    #[serde(flatten)]
    pub settings: BTreeMap<String, serde_json::Value>,
}

/// Online editor profile
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct EditorProfile {
    #[serde(default)]
    pub editor_profile_mode: Option<String>,

    #[serde(flatten)]
    pub settings: BTreeMap<String, serde_json::Value>,
}

/// Server-side lock held while a file is open in the online editor
///
/// Returned by checkout and sent back unchanged to check in.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct OnlineCheckout {
    #[serde(default)]
    pub online_checkout_id: String,

    #[serde(default)]
    pub editor_profile_mode: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}
