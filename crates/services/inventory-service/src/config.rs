//! Inventory service configuration.

use common::{ServiceConfig, DEFAULT_INVENTORY_PORT};

use crate::SERVICE_NAME;

/// Prefix of the service-scoped listener variables.
pub const ENV_PREFIX: &str = "INVENTORY_SERVICE";

/// Load listener configuration from environment variables.
pub fn from_env() -> ServiceConfig {
    ServiceConfig::from_env(SERVICE_NAME, ENV_PREFIX, DEFAULT_INVENTORY_PORT)
}

/// Same as [`from_env`] with an explicit variable source.
pub fn from_lookup<F>(lookup: F) -> ServiceConfig
where
    F: Fn(&str) -> Option<String>,
{
    ServiceConfig::from_lookup(SERVICE_NAME, ENV_PREFIX, DEFAULT_INVENTORY_PORT, lookup)
}
