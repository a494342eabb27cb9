//! Inventory Service - HTTP health-check service.

use clap::{Parser, Subcommand};
use common::{telemetry, Settings};
use inventory_service_lib::config;

#[derive(Parser)]
#[command(name = "inventory-service")]
#[command(about = "Inventory health-check service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Load settings and report whether they are valid
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    telemetry::init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            let config = config::from_env().with_overrides(host, port);
            inventory_service_lib::run_embedded(&config).await?;
        }
        Commands::CheckConfig => {
            let settings = Settings::load()?;
            println!("{:?}", settings);
        }
    }

    Ok(())
}
