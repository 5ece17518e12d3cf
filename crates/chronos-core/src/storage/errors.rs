use crate::errors::ChronosError;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid storage key '{key}'")]
    InvalidKey { key: String },

    #[error("Failed to read '{key}': {source}")]
    ReadFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{key}': {source}")]
    WriteFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

impl ChronosError for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            StorageError::InvalidKey { .. } => "STORAGE_INVALID_KEY",
            StorageError::ReadFailed { .. } => "STORAGE_READ_FAILED",
            StorageError::WriteFailed { .. } => "STORAGE_WRITE_FAILED",
        }
    }
}
