//! Configuration file
//!
//! Server profiles and output defaults live in one TOML file,
//! `<config dir>/tms/config.toml`. `TMS_CONFIG_DIR` replaces the directory.
//!
//! ```toml
//! schema_version = 1
//!
//! [defaults]
//! output = "json"
//! color = "never"
//! progress = false
//!
//! [[servers]]
//! name = "prod"
//! endpoint = "https://tms.example.com"
//! token = "..."
//! ```

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::server::Server;

/// Schema version written by this build
pub const SCHEMA_VERSION: u32 = 1;

/// Environment variable replacing the configuration directory
pub const CONFIG_DIR_ENV: &str = "TMS_CONFIG_DIR";

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub schema_version: u32,

    #[serde(default)]
    pub defaults: Defaults,

    #[serde(default)]
    pub servers: Vec<Server>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            defaults: Defaults::default(),
            servers: Vec::new(),
        }
    }
}

/// Output settings applied before command-line flags
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Defaults {
    pub output: OutputFormat,
    pub color: ColorMode,
    /// Show spinners while waiting on the server
    pub progress: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: OutputFormat::Human,
            color: ColorMode::Auto,
            progress: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Reads and writes the configuration file
#[derive(Debug)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Manager for the file in the user's configuration directory
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(config_dir()?.join(CONFIG_FILE)))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load the file, or the default configuration when it does not exist yet
    pub fn load(&self) -> Result<Config> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&self.config_path)?;
        let mut config: Config = toml::from_str(&content)?;

        match config.schema_version.cmp(&SCHEMA_VERSION) {
            Ordering::Equal => {}
            Ordering::Less => {
                tracing::debug!(
                    from = config.schema_version,
                    to = SCHEMA_VERSION,
                    "upgrading config schema"
                );
                config.schema_version = SCHEMA_VERSION;
            }
            Ordering::Greater => {
                return Err(Error::Config(format!(
                    "config schema {} is newer than supported schema {SCHEMA_VERSION}; upgrade tms",
                    config.schema_version
                )));
            }
        }

        Ok(config)
    }

    /// Write the file, creating its directory. Owner-only on Unix since
    /// server profiles carry tokens.
    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(dir) = self.config_path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        std::fs::write(&self.config_path, toml::to_string_pretty(config)?)?;
        restrict_to_owner(&self.config_path)
    }
}

fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir()
        .map(|dir| dir.join("tms"))
        .ok_or_else(|| Error::Config("cannot determine the user config directory".into()))
}

#[cfg(unix)]
fn restrict_to_owner(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_to_owner(_path: &Path) -> Result<()> {
    Ok(())
}
