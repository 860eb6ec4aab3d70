//! tms-core: Core library for the tms translation-management client
//!
//! This crate provides:
//! - Data-transfer records mirroring server resources
//! - Endpoint paths and query helpers
//! - The resource API traits implemented by the HTTP adapter
//! - Argument validation
//! - Configuration and server profile management
//!
//! It does not depend on any HTTP stack.

pub mod api;
pub mod config;
pub mod ensure;
pub mod error;
pub mod models;
pub mod server;
pub mod urls;

pub use api::{FileVersionApi, PermissionApi, ProjectApi, TemplateApi};
pub use config::{Config, ConfigManager};
pub use error::{Error, Result};
pub use server::{Server, ServerManager, TimeoutConfig};
