//! User service configuration.

use std::env;

use common::{ServiceConfig, DEFAULT_LOG_LEVEL};

/// Name reported in logs
pub const SERVICE_NAME: &str = "user-service";

/// Prefix of every variable this service reads
pub const ENV_PREFIX: &str = "USER_SERVICE";

/// Default initial store capacity
pub const DEFAULT_CAPACITY: usize = 16;

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Shared service settings (name, log level)
    pub service: ServiceConfig,
    /// Initial capacity reserved in both store views
    pub capacity: usize,
    /// Seed the store with the demo users on startup
    pub seed: bool,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `.env` first if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let key = |name: &str| format!("{}_{}", ENV_PREFIX, name);

        Self {
            service: ServiceConfig::from_lookup(SERVICE_NAME, ENV_PREFIX, &lookup),
            capacity: lookup(&key("CAPACITY"))
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.capacity),
            seed: lookup(&key("SEED"))
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.seed),
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: SERVICE_NAME.to_string(),
                log_level: DEFAULT_LOG_LEVEL.to_string(),
            },
            capacity: DEFAULT_CAPACITY,
            seed: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
