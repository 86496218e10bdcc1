//! Obfuscated key-value store.
//!
//! [`LocalStore`] wraps a [`Backend`] and is the only layer that knows which
//! keys are sensitive. Values for sensitive keys (`user`, `users`) are
//! serialized to JSON and then passed through an [`ObfuscationCodec`] before
//! they touch the backend; every other key is stored as plain JSON.
//!
//! The API is total by contract:
//!
//! - [`LocalStore::load`] never fails. A missing key, a corrupt encoding, or
//!   a decode failure all produce the caller-supplied default.
//! - [`LocalStore::save`] never fails to the caller. Serialization or backend
//!   failure is reported through `tracing` and the prior persisted state is
//!   left untouched.
//!
//! Keeping the rest of the system oblivious to at-rest encoding isolates the
//! (intentionally weak) obfuscation to one seam so it can be swapped for real
//! encryption without touching callers.

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};

use crate::backend::Backend;
use crate::constants::SENSITIVE_KEYS;

mod codec;
pub mod errors;

pub use codec::{Base64Codec, ObfuscationCodec};
pub use errors::StoreError;

/// Typed view over a [`Backend`] with transparent at-rest obfuscation.
#[derive(Clone)]
pub struct LocalStore {
    backend: Arc<dyn Backend>,
    codec: Arc<dyn ObfuscationCodec>,
}

impl LocalStore {
    /// Create a store over `backend` with the default [`Base64Codec`].
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self::with_codec(backend, Arc::new(Base64Codec))
    }

    /// Create a store with a custom obfuscation codec.
    pub fn with_codec(backend: Arc<dyn Backend>, codec: Arc<dyn ObfuscationCodec>) -> Self {
        Self { backend, codec }
    }

    /// Whether values at `key` are obfuscated before persistence.
    pub fn is_sensitive(key: &str) -> bool {
        SENSITIVE_KEYS.contains(&key)
    }

    /// Load the value stored at `key`, or `default` when the key is missing
    /// or its stored form cannot be decoded.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to read key from backend");
                return default;
            }
        };

        if Self::is_sensitive(key) {
            // Reverse the at-rest transform first; fall back to parsing the
            // raw text for values written before obfuscation was introduced.
            if let Ok(plain) = self.codec.decode(&raw)
                && let Ok(value) = serde_json::from_str(&plain)
            {
                return value;
            }
        }

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to deserialize stored value");
                default
            }
        }
    }

    /// Persist `value` at `key`.
    ///
    /// Never fails to the caller: on serialization or backend failure the
    /// error is logged and the previously persisted state is left untouched.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to serialize value for storage");
                return;
            }
        };

        let stored = if Self::is_sensitive(key) {
            self.codec.encode(&json)
        } else {
            json
        };

        if let Err(e) = self.backend.set(key, &stored) {
            tracing::error!(key, error = %e, "Failed to write key to backend");
        }
    }

    /// The wrapped backend, for persistence and downcasting.
    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }
}

impl std::fmt::Debug for LocalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalStore")
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}
