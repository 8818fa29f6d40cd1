//! FILENAME: core/store/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed entries file: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to serialize entries: {0}")]
    Serialize(#[source] serde_json::Error),
}
