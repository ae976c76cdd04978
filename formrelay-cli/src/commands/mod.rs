//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod apply;
mod enquire;
mod positions;

pub use apply::ApplyArgs;
pub use enquire::EnquireArgs;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Submit a job application
    Apply(ApplyArgs),
    /// Submit a contact enquiry
    Enquire(EnquireArgs),
    /// List departments and the positions they offer
    Positions,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Apply(args) => apply::handle_apply_command(args, config).await,
        Commands::Enquire(args) => enquire::handle_enquire_command(args, config).await,
        Commands::Positions => positions::handle_positions_command(),
    }
}
