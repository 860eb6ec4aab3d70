//! tms-http: HTTP adapter for the tms translation-management client
//!
//! This crate implements the resource traits from `tms-core` on top of
//! reqwest. `ApiConnection` owns the HTTP client, the base URL and the
//! token; the resource clients only build paths, queries and bodies.

pub mod client;
pub mod connection;
pub mod file_version;
pub mod multipart;
pub mod permission;
pub mod project;
pub mod template;

pub use client::TmsClient;
pub use connection::{ApiConnection, RequestBody};
pub use file_version::FileVersionClient;
pub use permission::PermissionClient;
pub use project::ProjectClient;
pub use template::TemplateClient;
