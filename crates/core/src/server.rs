//! Server profile management
//!
//! A server profile is a named reference to a translation-management server,
//! holding its endpoint and the API token to send with every request.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::ConfigManager;
use crate::error::{Error, Result};

/// Timeout configuration for a server profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// Connection timeout in milliseconds
    #[serde(default = "default_connect_timeout")]
    pub connect_ms: u64,

    /// Read timeout in milliseconds
    #[serde(default = "default_read_timeout")]
    pub read_ms: u64,
}

fn default_connect_timeout() -> u64 {
    5000
}

fn default_read_timeout() -> u64 {
    60000
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_ms: default_connect_timeout(),
            read_ms: default_read_timeout(),
        }
    }
}

/// A named translation-management server endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    /// Unique name for this profile
    pub name: String,

    /// Base URL of the server (e.g. "https://tms.example.com")
    pub endpoint: String,

    /// Bearer token sent in the Authorization header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Allow insecure TLS connections
    #[serde(default)]
    pub insecure: bool,

    /// Timeout configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<TimeoutConfig>,
}

impl Server {
    /// Create a new server profile with required fields
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            token: None,
            insecure: false,
            timeout: None,
        }
    }

    /// Attach an API token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the effective timeout configuration
    pub fn timeout_config(&self) -> TimeoutConfig {
        self.timeout.clone().unwrap_or_default()
    }

    /// Check that the profile can be used to reach a server
    ///
    /// The name must be a single word and the endpoint an absolute
    /// http(s) URL. Zero timeouts are rejected.
    pub fn validate(&self) -> Result<()> {
        crate::ensure::not_empty(&self.name, "name")?;
        if self.name.chars().any(char::is_whitespace) {
            return Err(Error::Config(format!(
                "server name '{}' must not contain whitespace",
                self.name
            )));
        }

        let url = Url::parse(self.endpoint.trim())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "unsupported endpoint scheme '{}'",
                url.scheme()
            )));
        }

        let timeout = self.timeout_config();
        if timeout.connect_ms == 0 || timeout.read_ms == 0 {
            return Err(Error::Config("timeouts must be positive".to_string()));
        }

        Ok(())
    }
}

/// Manager for server profile operations
pub struct ServerManager {
    config_manager: ConfigManager,
}

impl ServerManager {
    /// Create a new ServerManager with a specific ConfigManager
    pub fn with_config_manager(config_manager: ConfigManager) -> Self {
        Self { config_manager }
    }

    /// Create a new ServerManager using the default config location
    pub fn new() -> Result<Self> {
        let config_manager = ConfigManager::new()?;
        Ok(Self { config_manager })
    }

    /// List all configured servers
    pub fn list(&self) -> Result<Vec<Server>> {
        let config = self.config_manager.load()?;
        Ok(config.servers)
    }

    /// Get a server by name
    pub fn get(&self, name: &str) -> Result<Server> {
        let config = self.config_manager.load()?;
        config
            .servers
            .into_iter()
            .find(|s| s.name == name)
            .ok_or_else(|| Error::ServerNotFound(name.to_string()))
    }

    /// Add or update a server
    pub fn set(&self, server: Server) -> Result<()> {
        server.validate()?;
        let mut config = self.config_manager.load()?;

        config.servers.retain(|s| s.name != server.name);
        config.servers.push(server);

        self.config_manager.save(&config)
    }

    /// Remove a server
    pub fn remove(&self, name: &str) -> Result<()> {
        let mut config = self.config_manager.load()?;
        let original_len = config.servers.len();

        config.servers.retain(|s| s.name != name);

        if config.servers.len() == original_len {
            return Err(Error::ServerNotFound(name.to_string()));
        }

        self.config_manager.save(&config)
    }

    /// Check if a server exists
    pub fn exists(&self, name: &str) -> Result<bool> {
        let config = self.config_manager.load()?;
        Ok(config.servers.iter().any(|s| s.name == name))
    }
}
