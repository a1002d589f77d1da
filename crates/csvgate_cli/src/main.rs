mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "csvgate")]
#[command(version, about = "CSV upload validator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a CSV file
    Validate {
        /// Path to the CSV file
        file: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Run the HTTP upload server
    Serve {
        /// Server config file (TOML or YAML)
        #[arg(short, long)]
        config: Option<String>,

        /// Host to bind to (overrides config and CSVGATE_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config and CSVGATE_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over --verbose when set
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Validate { file, format } => commands::validate::execute(&file, &format),

        Commands::Serve { config, host, port } => {
            commands::serve::execute(config.as_deref(), host, port).await
        }
    }
}
