//! ChatDesk Error Types
//!
//! Classification itself never fails; these cover config and transcript I/O.

use thiserror::Error;

/// Central error type for ChatDesk
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transcript error: {0}")]
    Transcript(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for ChatDesk operations
pub type ChatResult<T> = Result<T, ChatError>;
