//! The legacy-to-structured log adapter.
//!
//! ## Invariants
//!
//! - **DELEGATE**: an adapter always holds exactly one backend handle, bound
//!   at construction and never replaced
//! - **FATAL-COLLAPSE**: `is_fatal_enabled` and `fatal*` use error severity
//! - **PASS-THROUGH**: every emit reaches the backend; enabled decisions are
//!   the backend's alone

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::adapters::TracingProvider;
use crate::domain::{render, LegacyLevel};
use crate::error::LogConfigurationError;
use crate::ports::{BackendLogger, Log, LoggerProvider};

/// Adapter implementing the legacy [`Log`] contract over a backend logger.
#[derive(Clone)]
pub struct LogAdapter {
    delegate: Arc<dyn BackendLogger>,
}

impl LogAdapter {
    /// Resolve `name` against the `tracing` backend.
    ///
    /// # Errors
    /// [`LogConfigurationError`] if the backend cannot produce the logger.
    pub fn get_instance(name: &str) -> Result<Self, LogConfigurationError> {
        Self::with_provider(&TracingProvider, name)
    }

    /// Resolve `name` against `provider`.
    ///
    /// Errors and panics raised by the provider are both reported as
    /// [`LogConfigurationError`]; no adapter is returned in either case.
    pub fn with_provider<P>(provider: &P, name: &str) -> Result<Self, LogConfigurationError>
    where
        P: LoggerProvider + ?Sized,
    {
        match panic::catch_unwind(AssertUnwindSafe(|| provider.logger(name))) {
            Ok(Ok(delegate)) => {
                debug!(logger = name, "Resolved legacy logger");
                Ok(Self::new(delegate))
            }
            Ok(Err(source)) => {
                warn!(logger = name, error = %source, "Backend could not create logger");
                Err(LogConfigurationError::Provider {
                    name: name.to_string(),
                    source,
                })
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                warn!(logger = name, panic = %message, "Backend panicked creating logger");
                Err(LogConfigurationError::ProviderPanicked {
                    name: name.to_string(),
                    message,
                })
            }
        }
    }

    /// Bind directly to an existing backend handle.
    pub fn new(delegate: Arc<dyn BackendLogger>) -> Self {
        Self { delegate }
    }

    /// Lifecycle hook called by the facade at shutdown.
    ///
    /// Intentionally does nothing: the backend owns its own lifecycle and
    /// must not be torn down from here.
    pub fn release() {}

    /// Name of the backend logger this adapter is bound to.
    pub fn name(&self) -> &str {
        self.delegate.name()
    }

    /// Whether `level` is currently enabled, after level mapping.
    pub fn is_enabled(&self, level: LegacyLevel) -> bool {
        self.delegate.is_enabled(level.severity())
    }

    /// Emit `message` at `level`, after level mapping.
    pub fn log(
        &self,
        level: LegacyLevel,
        message: &dyn fmt::Display,
        cause: Option<&(dyn Error + 'static)>,
    ) {
        self.delegate.log(level.severity(), &render(message), cause);
    }
}

impl fmt::Debug for LogAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogAdapter")
            .field("name", &self.name())
            .finish()
    }
}

impl Log for LogAdapter {
    fn is_trace_enabled(&self) -> bool {
        self.is_enabled(LegacyLevel::Trace)
    }

    fn is_debug_enabled(&self) -> bool {
        self.is_enabled(LegacyLevel::Debug)
    }

    fn is_info_enabled(&self) -> bool {
        self.is_enabled(LegacyLevel::Info)
    }

    fn is_warn_enabled(&self) -> bool {
        self.is_enabled(LegacyLevel::Warn)
    }

    fn is_error_enabled(&self) -> bool {
        self.is_enabled(LegacyLevel::Error)
    }

    fn is_fatal_enabled(&self) -> bool {
        self.is_enabled(LegacyLevel::Fatal)
    }

    fn trace(&self, message: &dyn fmt::Display) {
        self.log(LegacyLevel::Trace, message, None);
    }

    fn trace_with_cause(&self, message: &dyn fmt::Display, cause: &(dyn Error + 'static)) {
        self.log(LegacyLevel::Trace, message, Some(cause));
    }

    fn debug(&self, message: &dyn fmt::Display) {
        self.log(LegacyLevel::Debug, message, None);
    }

    fn debug_with_cause(&self, message: &dyn fmt::Display, cause: &(dyn Error + 'static)) {
        self.log(LegacyLevel::Debug, message, Some(cause));
    }

    fn info(&self, message: &dyn fmt::Display) {
        self.log(LegacyLevel::Info, message, None);
    }

    fn info_with_cause(&self, message: &dyn fmt::Display, cause: &(dyn Error + 'static)) {
        self.log(LegacyLevel::Info, message, Some(cause));
    }

    fn warn(&self, message: &dyn fmt::Display) {
        self.log(LegacyLevel::Warn, message, None);
    }

    fn warn_with_cause(&self, message: &dyn fmt::Display, cause: &(dyn Error + 'static)) {
        self.log(LegacyLevel::Warn, message, Some(cause));
    }

    fn error(&self, message: &dyn fmt::Display) {
        self.log(LegacyLevel::Error, message, None);
    }

    fn error_with_cause(&self, message: &dyn fmt::Display, cause: &(dyn Error + 'static)) {
        self.log(LegacyLevel::Error, message, Some(cause));
    }

    fn fatal(&self, message: &dyn fmt::Display) {
        self.log(LegacyLevel::Fatal, message, None);
    }

    fn fatal_with_cause(&self, message: &dyn fmt::Display, cause: &(dyn Error + 'static)) {
        self.log(LegacyLevel::Fatal, message, Some(cause));
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
