//! HTTP Server Configuration
//!
//! Host, port, CORS origins and upload size limit. Values come from serde
//! defaults, optionally a `.toml`/`.yaml`/`.yml` file, then the
//! `CSVGATE_HOST` and `CSVGATE_PORT` environment variables.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding the bind host.
pub const HOST_ENV_VAR: &str = "CSVGATE_HOST";

/// Environment variable overriding the bind port.
pub const PORT_ENV_VAR: &str = "CSVGATE_PORT";

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty or a `*` entry means any origin without credentials
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Maximum accepted request body in bytes (default: 10 MiB)
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://frontend:3000".to_string(),
    ]
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

/// Supported config file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

impl ConfigFormat {
    /// Detects the format from a file extension.
    pub fn detect(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or(ConfigError::InvalidExtension)?;

        match extension.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "toml" => Ok(ConfigFormat::Toml),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl ServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parses a config from TOML text. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Toml(e.to_string()))
    }

    /// Parses a config from YAML text. Missing keys take their defaults.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(content)?)
    }

    /// Loads a config file, choosing the parser from its extension.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::detect(path)?;
        let content = std::fs::read_to_string(path)?;

        match format {
            ConfigFormat::Yaml => Self::from_yaml(&content),
            ConfigFormat::Toml => Self::from_toml(&content),
        }
    }

    /// Applies `CSVGATE_HOST` / `CSVGATE_PORT` from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Applies host/port overrides from an arbitrary variable lookup.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(HOST_ENV_VAR) {
            self.host = host;
        }

        if let Some(port) = lookup(PORT_ENV_VAR) {
            self.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: PORT_ENV_VAR.to_string(),
                value: port.clone(),
            })?;
        }

        Ok(self)
    }
}
