//! Logging configuration from environment variables.

use std::env;

use serde::Deserialize;

/// Configuration for the subscriber installed by [`init_logging`](crate::init_logging).
///
/// Deserializable so a host application can embed it in its own config file;
/// missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Service name reported at startup
    pub service_name: String,

    /// Filter directives; targets are logger names (e.g. `info,org.apache.catalina=debug`)
    pub log_level: String,

    /// Whether to emit JSON formatted records
    pub json_logs: bool,

    /// Whether to print the event target (`legacy_log` for bridged records)
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            service_name: "legacy-log-bridge".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            with_target: true,
        }
    }
}

impl LoggingConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `LEGACY_LOG_SERVICE`: Service name (default: legacy-log-bridge)
    /// - `LEGACY_LOG_LEVEL` or `RUST_LOG`: Filter directives (default: info)
    /// - `LEGACY_LOG_JSON`: JSON output (default: false, true in containers)
    /// - `LEGACY_LOG_TARGET`: Print event targets (default: true)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self::from_lookup(|key| env::var(key).ok(), is_container)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>, is_container: bool) -> Self {
        let defaults = Self::default();

        Self {
            service_name: lookup("LEGACY_LOG_SERVICE").unwrap_or(defaults.service_name),

            log_level: lookup("LEGACY_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            json_logs: lookup("LEGACY_LOG_JSON")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(is_container),

            with_target: lookup("LEGACY_LOG_TARGET")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.with_target),
        }
    }
}
