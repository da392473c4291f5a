use thiserror::Error;

/// Errors that end a recording run
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RecordError {
    /// Whether the failure happened while fetching the page
    pub fn is_network(&self) -> bool {
        matches!(self, RecordError::Network(_))
    }
}

pub type Result<T, E = RecordError> = std::result::Result<T, E>;
