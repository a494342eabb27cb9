//! Combined binary for development - runs both services in one process.

use std::env;

use clap::{Parser, Subcommand};
use common::{settings, telemetry, ServiceConfig};
use tokio::task::JoinError;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "health-services")]
#[command(about = "Combined inventory and store services for development")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run both services in a single process (development mode)
    Serve {
        /// Host for both services (default: each service's HOST variables)
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        inventory_port: Option<u16>,
        #[arg(long)]
        store_port: Option<u16>,
    },
}

/// Outcome of a spawned service task.
type ServiceExit = Result<Result<(), String>, JoinError>;

/// Listener configs for both services: environment first, then CLI overrides.
fn listener_configs<F>(
    lookup: F,
    host: Option<String>,
    inventory_port: Option<u16>,
    store_port: Option<u16>,
) -> (ServiceConfig, ServiceConfig)
where
    F: Fn(&str) -> Option<String>,
{
    let inventory = inventory_service_lib::config::from_lookup(&lookup)
        .with_overrides(host.clone(), inventory_port);
    let store = store_service_lib::config::from_lookup(&lookup).with_overrides(host, store_port);
    (inventory, store)
}

/// Map the first service to stop onto the process result.
fn check_exit(name: &str, exit: ServiceExit) -> Result<(), Box<dyn std::error::Error>> {
    match exit {
        Ok(Ok(())) => {
            info!("{} service stopped", name);
            Ok(())
        }
        Ok(Err(e)) => {
            error!("{} service failed: {}", name, e);
            Err(format!("{} service failed: {}", name, e).into())
        }
        Err(e) => {
            error!("{} service task aborted: {}", name, e);
            Err(e.into())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    telemetry::init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            inventory_port,
            store_port,
        } => {
            // Both services share the same process-wide settings
            let settings = settings::init()?;
            let (inventory, store) =
                listener_configs(|key| env::var(key).ok(), host, inventory_port, store_port);

            info!("Starting combined services ({})", settings.env);
            info!("  Inventory service: http://{}", inventory.addr());
            info!("  Store service:     http://{}", store.addr());

            let inventory_handle = tokio::spawn(async move {
                inventory_service_lib::run_embedded(&inventory)
                    .await
                    .map_err(|e| e.to_string())
            });

            let store_handle = tokio::spawn(async move {
                store_service_lib::run_embedded(&store)
                    .await
                    .map_err(|e| e.to_string())
            });

            // Both services stop on the same shutdown signal, so the first
            // exit decides the process result
            tokio::select! {
                exit = inventory_handle => check_exit("Inventory", exit)?,
                exit = store_handle => check_exit("Store", exit)?,
            }
        }
    }

    Ok(())
}
