//! Subscriber setup for hosts that do not install their own.
//!
//! Bridged records are ordinary `tracing` events, so any subscriber works.
//! This installs the usual registry + `EnvFilter` + `fmt` stack, in pretty
//! or JSON form.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{LogConfigurationError, LoggingConfig};

/// Build the filter: `RUST_LOG` wins, then the configured directives.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, LogConfigurationError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| LogConfigurationError::InvalidFilter(e.to_string()))
}

/// Install the global subscriber.
///
/// # Errors
/// - [`LogConfigurationError::InvalidFilter`] for bad filter directives
/// - [`LogConfigurationError::SubscriberInit`] if a global subscriber is
///   already set
pub fn init_logging(config: &LoggingConfig) -> Result<(), LogConfigurationError> {
    let env_filter = build_filter(config)?;

    if config.json_logs {
        // JSON output for containers/production
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(config.with_target)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()
            .map_err(|e| LogConfigurationError::SubscriberInit(e.to_string()))?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(config.with_target)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| LogConfigurationError::SubscriberInit(e.to_string()))?;
    }

    tracing::info!(
        service = %config.service_name,
        json = config.json_logs,
        "Legacy log bridge logging initialized"
    );

    Ok(())
}
