//! Adapters Layer (Driven Adapters)
//!
//! Implementations of the backend port.
//!
//! ## Adapters
//!
//! - `TracingProvider` / `TracingLogger` - emit through the `tracing` dispatcher

pub mod tracing_backend;

pub use tracing_backend::{TracingLogger, TracingProvider, LOG_TARGET};
