//! Shared listener configuration.

use std::env;

/// Default host address to bind.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port of the inventory service.
pub const DEFAULT_INVENTORY_PORT: u16 = 8000;

/// Default port of the store service.
pub const DEFAULT_STORE_PORT: u16 = 8001;

/// Listener configuration shared by all services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// `<PREFIX>_HOST` / `<PREFIX>_PORT` win over the generic `HOST` / `PORT`.
    pub fn from_env(service_name: &str, prefix: &str, default_port: u16) -> Self {
        Self::from_lookup(service_name, prefix, default_port, |key| env::var(key).ok())
    }

    /// Same as [`ServiceConfig::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(service_name: &str, prefix: &str, default_port: u16, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let scoped = |key: &str| {
            lookup(&format!("{}_{}", prefix, key)).or_else(|| lookup(key))
        };

        Self {
            service_name: service_name.to_string(),
            host: scoped("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: scoped("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(default_port),
        }
    }

    /// Override host and port with values given on the command line.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// Get the full server address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
