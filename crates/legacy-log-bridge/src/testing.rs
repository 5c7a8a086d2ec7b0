//! Test doubles for the backend port.
//!
//! - `RecordingProvider`: keeps every record and lets tests switch severities
//!   on and off
//! - `FailingProvider`: refuses every logger name
//! - `PanickingProvider`: panics while resolving

use std::collections::HashSet;
use std::error::Error;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::Severity;
use crate::error::ProviderError;
use crate::ports::{BackendLogger, LoggerProvider};

/// One captured record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub logger: String,
    pub severity: Severity,
    pub message: String,
    /// `Display` text of the cause, if one was attached
    pub cause: Option<String>,
    /// `Display` text of each `source()` below the cause, outermost first
    pub cause_chain: Vec<String>,
}

fn source_chain(cause: Option<&(dyn Error + 'static)>) -> Vec<String> {
    let mut chain = Vec::new();
    let mut next = cause.and_then(|c| c.source());
    while let Some(err) = next {
        chain.push(err.to_string());
        next = err.source();
    }
    chain
}

#[derive(Debug)]
struct Shared {
    records: Mutex<Vec<Record>>,
    disabled: Mutex<HashSet<Severity>>,
    resolved: Mutex<Vec<String>>,
}

/// Backend double that records everything it is asked to emit.
///
/// Clones share the same record buffer.
#[derive(Debug, Clone)]
pub struct RecordingProvider {
    shared: Arc<Shared>,
}

impl Default for RecordingProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingProvider {
    /// All severities enabled.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                records: Mutex::new(Vec::new()),
                disabled: Mutex::new(HashSet::new()),
                resolved: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Report `severity` as enabled or disabled from now on.
    pub fn set_enabled(&self, severity: Severity, enabled: bool) {
        let mut disabled = self.shared.disabled.lock();
        if enabled {
            disabled.remove(&severity);
        } else {
            disabled.insert(severity);
        }
    }

    pub fn records(&self) -> Vec<Record> {
        self.shared.records.lock().clone()
    }

    /// Names passed to `logger()`, in call order.
    pub fn resolved_names(&self) -> Vec<String> {
        self.shared.resolved.lock().clone()
    }

    pub fn clear(&self) {
        self.shared.records.lock().clear();
    }
}

impl LoggerProvider for RecordingProvider {
    fn logger(&self, name: &str) -> Result<Arc<dyn BackendLogger>, ProviderError> {
        self.shared.resolved.lock().push(name.to_string());
        Ok(Arc::new(RecordingLogger {
            name: name.to_string(),
            shared: Arc::clone(&self.shared),
        }))
    }
}

/// Handle returned by [`RecordingProvider`].
#[derive(Debug)]
pub struct RecordingLogger {
    name: String,
    shared: Arc<Shared>,
}

impl BackendLogger for RecordingLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self, severity: Severity) -> bool {
        !self.shared.disabled.lock().contains(&severity)
    }

    // Records unconditionally; filtering is not this double's job.
    fn log(&self, severity: Severity, message: &str, cause: Option<&(dyn Error + 'static)>) {
        self.shared.records.lock().push(Record {
            logger: self.name.clone(),
            severity,
            message: message.to_string(),
            cause: cause.map(|c| c.to_string()),
            cause_chain: source_chain(cause),
        });
    }
}

/// Provider that cannot produce any logger.
#[derive(Debug, Clone)]
pub struct FailingProvider {
    reason: String,
}

impl FailingProvider {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl LoggerProvider for FailingProvider {
    fn logger(&self, _name: &str) -> Result<Arc<dyn BackendLogger>, ProviderError> {
        Err(self.reason.clone().into())
    }
}

/// Provider that panics while resolving.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanickingProvider;

impl LoggerProvider for PanickingProvider {
    fn logger(&self, name: &str) -> Result<Arc<dyn BackendLogger>, ProviderError> {
        panic!("no backend binding for '{name}'");
    }
}
