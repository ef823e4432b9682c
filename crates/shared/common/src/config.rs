//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// Log filter used when nothing is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log filter forced by verbose mode
pub const VERBOSE_LOG_LEVEL: &str = "debug";

/// Settings every service binary resolves the same way.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name, attached to startup logs
    pub service_name: String,
    /// `EnvFilter` directive
    pub log_level: String,
}

impl ServiceConfig {
    /// Resolve settings through `lookup`.
    ///
    /// The log level comes from `<PREFIX>_LOG_LEVEL`, then `RUST_LOG`, then
    /// [`DEFAULT_LOG_LEVEL`]. Blank values count as unset.
    pub fn from_lookup<F>(service_name: &str, prefix: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            service_name: service_name.to_string(),
            log_level: present(&format!("{}_LOG_LEVEL", prefix))
                .or_else(|| present("RUST_LOG"))
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    /// Filter directive for the tracing subscriber
    pub fn log_filter(&self, verbose: bool) -> &str {
        if verbose {
            VERBOSE_LOG_LEVEL
        } else {
            &self.log_level
        }
    }
}
