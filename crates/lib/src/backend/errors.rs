//! Error types for storage backends.

use thiserror::Error;

/// Errors that can occur in a storage backend.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BackendError {
    /// File I/O while persisting or loading backend state
    #[error("File I/O error: {source}")]
    FileIo {
        #[from]
        source: std::io::Error,
    },

    /// Serializing the backend state for persistence failed
    #[error("Failed to serialize backend state: {source}")]
    SerializationFailed { source: serde_json::Error },

    /// Deserializing persisted backend state failed
    #[error("Failed to deserialize backend state: {source}")]
    DeserializationFailed { source: serde_json::Error },
}

impl BackendError {
    /// Check if this error is related to serialization
    pub fn is_serialization_error(&self) -> bool {
        matches!(
            self,
            BackendError::SerializationFailed { .. } | BackendError::DeserializationFailed { .. }
        )
    }
}

impl From<BackendError> for crate::Error {
    fn from(err: BackendError) -> Self {
        crate::Error::Backend(err)
    }
}
