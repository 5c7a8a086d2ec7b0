//! Message rendering.
//!
//! The legacy contract accepts any displayable value as the message. The
//! record text is the value's `Display` output, unmodified. An absent message
//! renders as the literal text `null`.

use std::fmt;

/// Text recorded for an absent message.
pub const NULL_TEXT: &str = "null";

/// Stand-in for an absent message. Displays as `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullMessage;

impl fmt::Display for NullMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(NULL_TEXT)
    }
}

/// Render a message to its record text.
pub fn render(message: &dyn fmt::Display) -> String {
    message.to_string()
}

/// Render an optional message, mapping `None` to `null`.
pub fn render_message(message: Option<&dyn fmt::Display>) -> String {
    match message {
        Some(message) => render(message),
        None => NULL_TEXT.to_string(),
    }
}
