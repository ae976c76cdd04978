//! Formrelay CLI
//!
//! Command-line interface for submitting applications and enquiries to a
//! formrelay server.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;

#[derive(Parser)]
#[command(name = "formrelay")]
#[command(about = "Formrelay submission CLI", long_about = None)]
struct Cli {
    /// Formrelay server URL
    #[arg(
        long,
        env = "FORMRELAY_SERVER_URL",
        default_value = "http://localhost:8080"
    )]
    server_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        server_url: cli.server_url,
    };

    handle_command(cli.command, &config).await
}
