//! Error types for event type lookup.

use thiserror::Error;

/// Errors that can occur when looking up event types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    /// The wire value is not a registered event type.
    #[error("unknown event type: {0}")]
    UnknownEventType(String),

    /// The symbol name is not a registered event type.
    #[error("unknown event type symbol: {0}")]
    UnknownSymbol(String),

    /// The category name is not a known event category.
    #[error("unknown event category: {0}")]
    UnknownCategory(String),
}

impl EventError {
    /// Returns true if a wire value failed reverse lookup.
    pub fn is_unknown_event_type(&self) -> bool {
        matches!(self, EventError::UnknownEventType(_))
    }

    /// Returns the input that failed to resolve.
    pub fn input(&self) -> &str {
        match self {
            EventError::UnknownEventType(s)
            | EventError::UnknownSymbol(s)
            | EventError::UnknownCategory(s) => s,
        }
    }
}
