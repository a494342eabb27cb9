//! Common utilities shared across the health services.
//!
//! This crate provides:
//! - Application settings loaded from environment-specific files
//! - Listener configuration for each service
//! - Unified error handling for startup and HTTP
//! - The health payload, tracing setup and the server runner

pub mod config;
pub mod error;
pub mod health;
pub mod server;
pub mod settings;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, SettingsError};
pub use health::HealthResponse;
pub use settings::{Settings, SettingsLoader};
