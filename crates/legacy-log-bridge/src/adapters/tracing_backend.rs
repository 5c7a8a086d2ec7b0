//! Tracing library backend.
//!
//! Filtering is per logger name: before a record is emitted, the current
//! dispatcher is asked about metadata whose *target is the logger name*, so
//! directives such as `org.apache.catalina=debug` apply to every logger
//! under `org.apache.catalina`, exactly as the legacy facade's per-name levels
//! did. The same check backs the `is_*_enabled` predicates.
//!
//! Emitted events come from one static callsite per level under
//! [`LOG_TARGET`]. The logger name travels as the `logger` field and a
//! cause, when given, as the `error` field (recorded as a `dyn Error`, so
//! subscribers can walk its source chain).
//!
//! ```ignore
//! use legacy_log_bridge::{LogAdapter, Log};
//!
//! // RUST_LOG="info,org.apache.catalina=debug"
//! let log = LogAdapter::get_instance("org.apache.catalina.startup.Catalina")?;
//! assert!(log.is_debug_enabled());
//! log.info(&"Server startup in [812] milliseconds");
//! ```

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use tracing::field::{FieldSet, Value};
use tracing::level_filters::LevelFilter;
use tracing::{dispatcher, Dispatch, Event, Level, Metadata};
use tracing_core::callsite::{Callsite, Identifier};
use tracing_core::metadata::Kind;
use tracing_core::subscriber::Interest;

use crate::domain::Severity;
use crate::error::ProviderError;
use crate::ports::{BackendLogger, LoggerProvider};

/// Target every bridged event is emitted under.
pub const LOG_TARGET: &str = "legacy_log";

static FIELD_NAMES: &[&str] = &["message", "logger", "error"];

macro_rules! bridge_callsite {
    ($level:expr, $cs:ident, $meta:ident, $ty:ident) => {
        struct $ty;
        static $cs: $ty = $ty;
        static $meta: Metadata<'static> = Metadata::new(
            "legacy log event",
            LOG_TARGET,
            $level,
            None,
            None,
            None,
            FieldSet::new(FIELD_NAMES, Identifier(&$cs)),
            Kind::EVENT,
        );

        impl Callsite for $ty {
            fn set_interest(&self, _: Interest) {}

            fn metadata(&self) -> &Metadata<'_> {
                &$meta
            }
        }
    };
}

bridge_callsite!(Level::TRACE, TRACE_CS, TRACE_META, TraceCallsite);
bridge_callsite!(Level::DEBUG, DEBUG_CS, DEBUG_META, DebugCallsite);
bridge_callsite!(Level::INFO, INFO_CS, INFO_META, InfoCallsite);
bridge_callsite!(Level::WARN, WARN_CS, WARN_META, WarnCallsite);
bridge_callsite!(Level::ERROR, ERROR_CS, ERROR_META, ErrorCallsite);

fn callsite(severity: Severity) -> (&'static dyn Callsite, &'static Metadata<'static>) {
    match severity {
        Severity::Trace => (&TRACE_CS, &TRACE_META),
        Severity::Debug => (&DEBUG_CS, &DEBUG_META),
        Severity::Info => (&INFO_CS, &INFO_META),
        Severity::Warn => (&WARN_CS, &WARN_META),
        Severity::Error => (&ERROR_CS, &ERROR_META),
    }
}

/// Metadata the dispatcher filters on: same callsite, target = logger name.
fn filter_metadata(name: &str, severity: Severity) -> Metadata<'_> {
    let (cs, _) = callsite(severity);
    Metadata::new(
        "legacy log record",
        name,
        Level::from(severity),
        None,
        None,
        None,
        FieldSet::new(FIELD_NAMES, Identifier(cs)),
        Kind::EVENT,
    )
}

fn enabled_in(dispatch: &Dispatch, name: &str, severity: Severity) -> bool {
    Level::from(severity) <= LevelFilter::current()
        && dispatch.enabled(&filter_metadata(name, severity))
}

/// Named logger handle that writes through `tracing`.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    name: Arc<str>,
}

impl TracingLogger {
    pub fn new(name: &str) -> Self {
        Self { name: Arc::from(name) }
    }
}

impl BackendLogger for TracingLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self, severity: Severity) -> bool {
        dispatcher::get_default(|dispatch| enabled_in(dispatch, &self.name, severity))
    }

    fn log(&self, severity: Severity, message: &str, cause: Option<&(dyn Error + 'static)>) {
        dispatcher::get_default(|dispatch| {
            if !enabled_in(dispatch, &self.name, severity) {
                return;
            }

            let (_, meta) = callsite(severity);
            let fields = meta.fields();
            let mut iter = fields.iter();
            let (Some(message_field), Some(logger_field), Some(error_field)) =
                (iter.next(), iter.next(), iter.next())
            else {
                return;
            };
            let name: &str = &self.name;

            dispatch.event(&Event::new(
                meta,
                &fields.value_set(&[
                    (
                        &message_field,
                        Some(&format_args!("{}", message) as &dyn Value),
                    ),
                    (&logger_field, Some(&name as &dyn Value)),
                    (&error_field, cause.as_ref().map(|c| c as &dyn Value)),
                ]),
            ));
        });
    }
}

impl fmt::Display for TracingLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Provider backed by the current `tracing` dispatcher.
///
/// Resolution never fails: the logger name only shapes filtering and the
/// `logger` field of each record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProvider;

impl TracingProvider {
    pub fn new() -> Self {
        Self
    }
}

impl LoggerProvider for TracingProvider {
    fn logger(&self, name: &str) -> Result<Arc<dyn BackendLogger>, ProviderError> {
        Ok(Arc::new(TracingLogger::new(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TracingLogger>();
        assert_send_sync::<TracingProvider>();
    }

    #[test]
    fn test_provider_keeps_name() {
        let logger = TracingProvider::new().logger("app.startup").unwrap();
        assert_eq!(logger.name(), "app.startup");
    }

    #[test]
    fn test_provider_accepts_empty_name() {
        let logger = TracingProvider.logger("").unwrap();
        assert_eq!(logger.name(), "");
    }

    #[test]
    fn test_log_without_subscriber_is_silent() {
        let logger = TracingLogger::new("quiet");
        assert!(!logger.is_enabled(Severity::Error));
        logger.log(Severity::Info, "no subscriber", None);
        let cause = std::io::Error::other("disk gone");
        logger.log(Severity::Error, "still fine", Some(&cause));
    }

    #[test]
    fn test_callsites_share_field_layout() {
        for severity in [
            Severity::Trace,
            Severity::Debug,
            Severity::Info,
            Severity::Warn,
            Severity::Error,
        ] {
            let (_, meta) = callsite(severity);
            assert_eq!(*meta.level(), Level::from(severity));
            assert_eq!(meta.target(), LOG_TARGET);
            let names: Vec<_> = meta.fields().iter().map(|f| f.name()).collect();
            assert_eq!(names, FIELD_NAMES);
        }
    }

    #[test]
    fn test_filter_metadata_targets_logger_name() {
        let meta = filter_metadata("org.apache.catalina.startup.Catalina", Severity::Debug);
        assert_eq!(meta.target(), "org.apache.catalina.startup.Catalina");
        assert_eq!(*meta.level(), Level::DEBUG);
        assert!(meta.is_event());
    }

    #[test]
    fn test_display_is_name() {
        assert_eq!(TracingLogger::new("x.y").to_string(), "x.y");
    }
}
