//! Error types for the log bridge

use thiserror::Error;

/// Failure reported by a backend while resolving a named logger.
pub type ProviderError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The bridge's single failure surface.
///
/// Raised when a logger cannot be created for a name, or when the
/// subscriber cannot be configured. Emit and predicate calls never fail.
#[derive(Debug, Error)]
pub enum LogConfigurationError {
    #[error("Error creating tracing logger")]
    Provider {
        name: String,
        #[source]
        source: ProviderError,
    },

    #[error("Error creating tracing logger: provider panicked while resolving '{name}': {message}")]
    ProviderPanicked { name: String, message: String },

    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}

impl LogConfigurationError {
    /// Logger name the failed resolution was for, if any.
    pub fn logger_name(&self) -> Option<&str> {
        match self {
            Self::Provider { name, .. } | Self::ProviderPanicked { name, .. } => Some(name),
            Self::InvalidFilter(_) | Self::SubscriberInit(_) => None,
        }
    }
}
