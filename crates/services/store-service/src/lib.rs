//! Store Service Library
//!
//! This crate provides the store health-check HTTP service.
//! It can be run as a standalone service or embedded in the combined binary.

pub mod config;
pub mod handlers;
pub mod openapi;
pub mod routes;

use common::server;
use common::settings::{self, SettingsLoader};
use common::ServiceConfig;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::routes::create_router;

/// Name reported by the health check.
pub const SERVICE_NAME: &str = "store";

/// Run the store service as an embedded component (for combined binary).
pub async fn run_embedded(config: &ServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    run(config, &SettingsLoader::from_process_env()).await
}

/// Load settings with `loader`, then serve until a shutdown signal.
///
/// Fails before binding if settings cannot be loaded.
pub async fn run(
    config: &ServiceConfig,
    loader: &SettingsLoader,
) -> Result<(), Box<dyn std::error::Error>> {
    let service = config.service_name.as_str();
    let settings = settings::init_with(loader).map_err(|e| {
        error!(service, "Failed to load settings: {}", e);
        e
    })?;
    info!(service, env = %settings.env, "Settings loaded");

    // Build router
    let app = create_router().layer(TraceLayer::new_for_http());

    let listener = server::bind(&config.addr()).await?;
    info!(service, "Store service listening on {}", listener.local_addr()?);

    server::serve(listener, app, server::shutdown_signal()).await?;
    info!(service, "Store service stopped");

    Ok(())
}
