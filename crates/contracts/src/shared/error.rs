use thiserror::Error;

/// Failure of the durable storage slot
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("storage is not available: {0}")]
    Unavailable(String),
    #[error("failed to write storage: {0}")]
    Write(String),
}

/// Failure of a JSON export or import
#[derive(Error, Debug)]
pub enum TransferError {
    #[error("malformed JSON document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("document root must be a JSON object")]
    NotAnObject,
    #[error("document is missing the `{0}` field")]
    MissingField(&'static str),
}

pub type Result<T, E = TransferError> = std::result::Result<T, E>;
