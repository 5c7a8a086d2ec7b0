//! Name-based entry point used by the legacy facade's registry.

use std::any;
use std::fmt;
use std::sync::Arc;

use crate::adapters::TracingProvider;
use crate::error::LogConfigurationError;
use crate::ports::LoggerProvider;
use crate::service::LogAdapter;

/// Creates [`LogAdapter`]s from a backend provider.
///
/// Holds no cache: every call resolves a fresh adapter, and adapters for the
/// same name share nothing but the name.
#[derive(Clone)]
pub struct LogFactory {
    provider: Arc<dyn LoggerProvider>,
}

impl Default for LogFactory {
    fn default() -> Self {
        Self::new(Arc::new(TracingProvider))
    }
}

impl fmt::Debug for LogFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogFactory").finish_non_exhaustive()
    }
}

impl LogFactory {
    pub fn new(provider: Arc<dyn LoggerProvider>) -> Self {
        Self { provider }
    }

    /// Adapter bound to the logger called `name`.
    pub fn get_log(&self, name: &str) -> Result<LogAdapter, LogConfigurationError> {
        LogAdapter::with_provider(self.provider.as_ref(), name)
    }

    /// Adapter named after the fully qualified type name of `T`.
    pub fn get_log_for<T: ?Sized>(&self) -> Result<LogAdapter, LogConfigurationError> {
        self.get_log(any::type_name::<T>())
    }

    /// Shutdown hook. Forwards to [`LogAdapter::release`], which does nothing.
    pub fn release(&self) {
        LogAdapter::release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::Log;
    use crate::testing::{FailingProvider, RecordingProvider};

    #[allow(dead_code)]
    struct Catalina;

    #[test]
    fn test_get_log_binds_name() {
        let provider = RecordingProvider::new();
        let factory = LogFactory::new(Arc::new(provider.clone()));

        let log = factory.get_log("org.example.startup").unwrap();
        log.info(&"up");

        assert_eq!(log.name(), "org.example.startup");
        assert_eq!(provider.records()[0].logger, "org.example.startup");
    }

    #[test]
    fn test_get_log_for_uses_type_name() {
        let provider = RecordingProvider::new();
        let factory = LogFactory::new(Arc::new(provider.clone()));

        let log = factory.get_log_for::<Catalina>().unwrap();

        assert_eq!(log.name(), any::type_name::<Catalina>());
        assert!(log.name().ends_with("Catalina"));
    }

    #[test]
    fn test_no_caching() {
        let provider = RecordingProvider::new();
        let factory = LogFactory::new(Arc::new(provider.clone()));

        factory.get_log("a").unwrap();
        factory.get_log("a").unwrap();

        assert_eq!(provider.resolved_names(), vec!["a", "a"]);
    }

    #[test]
    fn test_failure_surfaces_as_configuration_error() {
        let factory = LogFactory::new(Arc::new(FailingProvider::new("misconfigured")));
        let err = factory.get_log("a").unwrap_err();
        assert!(matches!(err, LogConfigurationError::Provider { .. }));
    }

    #[test]
    fn test_release_leaves_adapters_usable() {
        let provider = RecordingProvider::new();
        let factory = LogFactory::new(Arc::new(provider.clone()));
        let log = factory.get_log("a").unwrap();

        factory.release();
        factory.release();
        log.error(&"still here");

        assert_eq!(provider.records().len(), 1);
    }

    #[test]
    fn test_default_uses_tracing_backend() {
        let log = LogFactory::default().get_log("default").unwrap();
        assert_eq!(log.name(), "default");
    }
}
