//! Error types for store operations.
//!
//! Store failures never propagate out of [`LocalStore::load`] and
//! [`LocalStore::save`], which log and absorb them, but the codec seam and
//! the internal fallible paths still report through these variants.
//!
//! [`LocalStore::load`]: crate::store::LocalStore::load
//! [`LocalStore::save`]: crate::store::LocalStore::save

use thiserror::Error;

/// Errors raised while encoding, decoding, or (de)serializing stored values.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// Serialization failed for a value bound for storage
    #[error("Serialization failed for key '{key}': {reason}")]
    SerializationFailed { key: String, reason: String },

    /// Deserialization failed for a stored value
    #[error("Deserialization failed for key '{key}': {reason}")]
    DeserializationFailed { key: String, reason: String },

    /// The at-rest obfuscation transform could not be reversed
    #[error("Failed to decode obfuscated value: {reason}")]
    DecodeFailed { reason: String },
}

impl StoreError {
    /// Check if this error is related to serialization
    pub fn is_serialization_error(&self) -> bool {
        matches!(
            self,
            StoreError::SerializationFailed { .. } | StoreError::DeserializationFailed { .. }
        )
    }
}

impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}
