//! Error types for the HTTP server.

use thiserror::Error;

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;

/// Errors raised while configuring or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Host/port pair does not form a socket address
    #[error("Invalid socket address: {0}")]
    InvalidAddress(String),

    /// Binding or serving failed
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading a server configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    Toml(String),

    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Unsupported file format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// Environment override could not be parsed
    #[error("Invalid value '{value}' for {name}")]
    InvalidEnv {
        /// Variable name
        name: String,
        /// Offending value
        value: String,
    },
}
