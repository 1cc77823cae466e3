use clap::Parser;
use itemstore_backend::cli::{Cli, execute_command};
use itemstore_backend::config::{ServerSettings, init_logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging()?;

    let cli = Cli::parse();

    let settings = ServerSettings::from_env().map_err(|e| {
        tracing::error!("Failed to load server settings: {}", e);
        e
    })?;

    execute_command(cli, settings).await
}
