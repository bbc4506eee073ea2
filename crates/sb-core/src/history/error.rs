use thiserror::Error;

use crate::clipboard::DisplayKey;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("clip is empty after trimming")]
    EmptyClip,

    #[error("no history entry for key {}", .0.redacted())]
    NotFound(DisplayKey),

    #[error("invalid history configuration: {0}")]
    InvalidConfig(String),

    /// The key sequence and the text map disagree. Never expected at runtime.
    #[error("history store inconsistent: {0}")]
    Inconsistent(String),
}
