use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Rejected product: {0}")]
    InvalidRecord(#[from] CoreError),

    #[error("An error occurred during JSON serialization/deserialization: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to access the inventory file: {0}")]
    Io(#[from] std::io::Error),
}
