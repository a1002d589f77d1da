use anyhow::{Context, Result};
use csvgate_server::{HttpServer, ServerConfig};
use std::path::Path;
use tracing::info;

pub async fn execute(
    config_path: Option<&str>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    // Config file, then environment, then command-line flags
    let mut config = match config_path {
        Some(path) => {
            info!("Loading server config: {}", path);
            ServerConfig::from_file(Path::new(path))
                .with_context(|| format!("Failed to load config file: {}", path))?
        }
        None => ServerConfig::default(),
    };

    config = config
        .with_env_overrides()
        .context("Invalid environment override")?;

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    info!("CORS origins: {:?}", config.cors_origins);

    HttpServer::with_config(config)
        .start()
        .await
        .context("HTTP server failed")
}
