//! # Legacy Log Bridge
//!
//! Routes a legacy six-level logging facade onto `tracing`.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): level mapping and message rendering
//!   - `LegacyLevel` / `Severity`: legacy levels and backend severities
//!   - `LEVEL_MAP`: the fixed mapping, `fatal` collapsing onto `error`
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `Log`: Driving port (the legacy contract)
//!   - `LoggerProvider` / `BackendLogger`: Driven port (named loggers)
//!
//! - **Service Layer** (`service/`)
//!   - `LogAdapter`: implements `Log` over one backend logger
//!   - `LogFactory`: resolves adapters by name
//!
//! - **Adapters Layer** (`adapters/`)
//!   - `TracingProvider`: backend bound to the `tracing` dispatcher, filtered
//!     per logger name
//!
//! ## Invariants
//!
//! - **FATAL-COLLAPSE**: `is_fatal_enabled() == is_error_enabled()`, and
//!   `fatal*` emits at error severity
//! - **PASS-THROUGH**: one call, at most one record, text unmodified
//! - Only logger creation can fail, always as `LogConfigurationError`
//!
//! ## Usage Example
//!
//! ```ignore
//! use legacy_log_bridge::{init_logging, Log, LogAdapter, LoggingConfig};
//!
//! init_logging(&LoggingConfig::from_env())?;
//!
//! let log = LogAdapter::get_instance("org.apache.catalina.startup.Catalina")?;
//! if log.is_info_enabled() {
//!     log.info(&"Server startup in [812] milliseconds");
//! }
//! log.fatal_with_cause(&"Connector failed", &io_error); // recorded at ERROR
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LEGACY_LOG_SERVICE` | `legacy-log-bridge` | Service name |
//! | `LEGACY_LOG_LEVEL` / `RUST_LOG` | `info` | Filter directives, keyed by logger name |
//! | `LEGACY_LOG_JSON` | `false` | JSON output |
//! | `LEGACY_LOG_TARGET` | `true` | Print event targets |

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-exports for convenience
pub use adapters::{TracingLogger, TracingProvider, LOG_TARGET};
pub use config::LoggingConfig;
pub use domain::{render_message, LegacyLevel, NullMessage, Severity, LEVEL_MAP};
pub use error::{LogConfigurationError, ProviderError};
pub use logging::init_logging;
pub use ports::{BackendLogger, ContractMember, Log, LoggerProvider, MemberKind, LOG_CONTRACT};
pub use service::{LogAdapter, LogFactory};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_instance_from_crate_root() {
        let log = LogAdapter::get_instance("root").unwrap();
        assert_eq!(log.name(), "root");
        assert_eq!(LOG_TARGET, "legacy_log");
    }
}
