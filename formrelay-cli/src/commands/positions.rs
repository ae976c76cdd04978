//! Positions command handler
//!
//! Prints the department and position table the application form accepts.

use anyhow::Result;
use colored::*;
use formrelay_core::domain::department;

/// List departments and their open positions
pub fn handle_positions_command() -> Result<()> {
    println!("{}", "Open positions:".bold());
    println!();

    for name in department::departments() {
        println!("  {} {}", "▸".cyan(), name.bold());
        if let Some(positions) = department::positions_for(name) {
            for position in positions {
                println!("    {}", position);
            }
        }
        println!();
    }

    Ok(())
}
