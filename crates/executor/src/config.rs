//! Client configuration via `zeondb.toml`
//!
//! Holds where the engine lives and where its client library is. A default
//! file can be written on first use; edit it to point at another engine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "zeondb.toml";

/// Port the engine listens on by default.
pub const DEFAULT_PORT: u16 = 6748;

/// Client configuration loaded from `zeondb.toml`.
///
/// # Example
///
/// ```toml
/// address = "127.0.0.1"
/// port = 6748
/// library = "libZeonCAPI.so"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Engine address.
    #[serde(default = "default_address")]
    pub address: String,
    /// Engine port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path (or loader search name) of the engine's client library.
    #[serde(default = "default_library")]
    pub library: PathBuf,
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_library() -> PathBuf {
    PathBuf::from("libZeonCAPI.so")
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            library: default_library(),
        }
    }
}

impl ClientConfig {
    /// Check the values for obvious mistakes.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is empty or the port is 0.
    pub fn validate(&self) -> Result<()> {
        if self.address.trim().is_empty() {
            return Err(Error::Config {
                reason: "address cannot be empty".to_string(),
            });
        }
        if self.port == 0 {
            return Err(Error::Config {
                reason: "port cannot be 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# ZeonDB client configuration
#
# Engine address and port
address = "127.0.0.1"
port = 6748

# Engine client library (path or loader search name)
library = "libZeonCAPI.so"
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            reason: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        let config: ClientConfig = toml::from_str(&content).map_err(|e| Error::Config {
            reason: format!("Failed to parse config file '{}': {}", path.display(), e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| Error::Config {
                reason: format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ),
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| Error::Config {
            reason: format!("Failed to serialize config: {}", e),
        })?;
        std::fs::write(path, content).map_err(|e| Error::Config {
            reason: format!("Failed to write config file '{}': {}", path.display(), e),
        })
    }
}
