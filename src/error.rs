//! Error types
//!
//! Scan rejections are not errors; see [`crate::types::ScanVerdict`].

use thiserror::Error;

/// Result type for gate operations
pub type GateResult<T> = Result<T, GateError>;

#[derive(Debug, Error)]
pub enum GateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Scanned code is empty")]
    EmptyCode,

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("No active event")]
    NoActiveEvent,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl GateError {
    /// Stable machine-readable code for the station protocol
    pub fn code(&self) -> &'static str {
        match self {
            GateError::Io(_) => "IO_ERROR",
            GateError::Json(_) => "JSON_ERROR",
            GateError::InvalidInput(_) => "INVALID_INPUT",
            GateError::EmptyCode => "EMPTY_CODE",
            GateError::EventNotFound(_) => "EVENT_NOT_FOUND",
            GateError::NoActiveEvent => "NO_ACTIVE_EVENT",
            GateError::Storage(_) => "STORAGE_ERROR",
        }
    }
}
