//! Error types for the awards-pool engine

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PoolError>;

#[derive(Error, Debug)]
pub enum PoolError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("{env_var} environment variable not set")]
    MissingConfig { env_var: String },

    #[error("Event id '{event_id}' does not end in a 4-digit year")]
    InvalidEventId { event_id: String },

    #[error("No snapshot for source '{source_id}' at {path}")]
    SnapshotMissing { source_id: String, path: String },

    #[error("Store error: {message}")]
    Store { message: String },
}
