//! Outbound Ports (Driven Ports)
//!
//! What the bridge needs from the structured logging backend: a lookup of
//! loggers by name, and per-logger level queries and leveled emits with an
//! optional cause.

use std::error::Error;
use std::sync::Arc;

use crate::domain::Severity;
use crate::error::ProviderError;

/// A named logger handle owned by the backend.
///
/// Emits must not fail. Whether a record is written, and where, is the
/// backend's business.
pub trait BackendLogger: Send + Sync {
    /// Name this handle was resolved for.
    fn name(&self) -> &str;

    /// Whether a record at `severity` would currently be emitted.
    fn is_enabled(&self, severity: Severity) -> bool;

    /// Emit one record.
    fn log(&self, severity: Severity, message: &str, cause: Option<&(dyn Error + 'static)>);
}

/// Resolves named loggers (Driven Port)
pub trait LoggerProvider: Send + Sync {
    /// Resolve the logger for `name`.
    ///
    /// # Errors
    /// Any backend failure; the caller wraps it into
    /// [`LogConfigurationError`](crate::LogConfigurationError).
    fn logger(&self, name: &str) -> Result<Arc<dyn BackendLogger>, ProviderError>;
}

impl<P: LoggerProvider + ?Sized> LoggerProvider for Arc<P> {
    fn logger(&self, name: &str) -> Result<Arc<dyn BackendLogger>, ProviderError> {
        (**self).logger(name)
    }
}
