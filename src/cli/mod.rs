// CLI module for serving the API and maintaining the data file

pub mod items;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::ServerSettings;

/// ItemStore CLI
#[derive(Parser)]
#[command(name = "itemstore")]
#[command(about = "ItemStore catalog backend", long_about = None)]
pub struct Cli {
    /// Runs the server when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start the HTTP server
    Serve,

    /// Write the demo catalog to the data file
    Seed {
        /// Overwrite a data file that already has items
        #[arg(long)]
        force: bool,
    },

    /// Print the items stored in the data file as JSON
    List,
}

/// Execute CLI command
///
/// Routes the parsed CLI command to the appropriate handler function.
///
/// # Arguments
/// * `cli` - Parsed CLI arguments
/// * `settings` - Server settings loaded from the environment
///
/// # Returns
/// * `Ok(())` - Command executed successfully
/// * `Err(...)` - Command execution failed
pub async fn execute_command(
    cli: Cli,
    settings: ServerSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve::run_server(settings).await?,
        Commands::Seed { force } => items::seed_items(settings.data_file(), force).await?,
        Commands::List => items::list_items(settings.data_file()).await?,
    }

    Ok(())
}
