//! Configuration management for Chatshelf
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::cli::{Cli, Commands};
use crate::error::{ChatShelfError, Result};
use crate::storage::{self, FileNaming};
use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for Chatshelf
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where and how chats are stored
    #[serde(default)]
    pub storage: StorageConfig,

    /// HTTP API settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage directory; defaults to the platform data directory
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// File naming scheme: "id" or "title"
    #[serde(default)]
    pub file_naming: FileNaming,
}

impl StorageConfig {
    /// The configured directory, or the platform default
    ///
    /// # Errors
    ///
    /// Returns error if no directory is configured and the platform data
    /// directory cannot be determined
    pub fn resolve_directory(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.directory {
            return Ok(dir.clone());
        }
        storage::default_directory().ok_or_else(|| {
            ChatShelfError::Config("Could not determine data directory".to_string()).into()
        })
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// `host:port` for binding
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Returns
    ///
    /// Returns the loaded and merged configuration
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed
    pub fn load(path: &str, cli: &Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars()?;
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ChatShelfError::Config(format!("Failed to read config file: {}", e)))?;
        let config = serde_yaml::from_str(&contents).map_err(ChatShelfError::Yaml)?;
        Ok(config)
    }

    fn apply_env_vars(&mut self) -> Result<()> {
        if let Ok(dir) = std::env::var("CHATSHELF_STORAGE_DIR") {
            tracing::debug!("Storage directory from env: {}", dir);
            self.storage.directory = Some(PathBuf::from(dir));
        }

        if let Ok(naming) = std::env::var("CHATSHELF_FILE_NAMING") {
            self.storage.file_naming = naming
                .parse()
                .map_err(|e: String| ChatShelfError::Config(e))?;
        }

        if let Ok(host) = std::env::var("CHATSHELF_HOST") {
            self.server.host = host;
        }

        if let Ok(port) = std::env::var("CHATSHELF_PORT") {
            self.server.port = port.parse().map_err(|_| {
                ChatShelfError::Config(format!("Invalid CHATSHELF_PORT: {}", port))
            })?;
        }

        Ok(())
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if cli.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        if let Some(dir) = &cli.storage_dir {
            self.storage.directory = Some(dir.clone());
        }

        if let Commands::Serve { host, port } = &cli.command {
            if let Some(host) = host {
                self.server.host = host.clone();
            }
            if let Some(port) = port {
                self.server.port = *port;
            }
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if any validation check fails
    pub fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.storage.directory {
            if dir.as_os_str().is_empty() {
                return Err(ChatShelfError::Config(
                    "storage.directory cannot be empty".to_string(),
                )
                .into());
            }
        }

        if self.server.host.trim().is_empty() {
            return Err(
                ChatShelfError::Config("server.host cannot be empty".to_string()).into(),
            );
        }

        if self.server.port == 0 {
            return Err(
                ChatShelfError::Config("server.port must be greater than 0".to_string()).into(),
            );
        }

        for origin in &self.server.cors_origins {
            if origin.parse::<HeaderValue>().is_err() {
                return Err(ChatShelfError::Config(format!(
                    "Invalid CORS origin: {}",
                    origin
                ))
                .into());
            }
        }

        Ok(())
    }
}
