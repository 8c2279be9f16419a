//! Controller Error Types

use thiserror::Error;

/// Errors raised at the event parsing edge
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    /// Name does not match any known event
    #[error("Unknown event: {0}")]
    UnknownEvent(String),
}
