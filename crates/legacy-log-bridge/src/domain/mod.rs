//! Domain Layer
//!
//! Pure level and message logic, no I/O.

pub mod level;
pub mod message;

pub use level::{LegacyLevel, Severity, LEVEL_MAP};
pub use message::{render, render_message, NullMessage, NULL_TEXT};
