//! At-rest obfuscation codec for sensitive keys.
//!
//! The transform applied here is reversible, deterministic, and **not**
//! cryptography: it encodes the serialized value's bytes into printable text
//! so the credential records are not casually readable in the persisted
//! state. That is the entire contract inherited from the source system, and
//! tests rely on its observable round-trip behavior.
//!
//! The codec sits behind a trait so a real cipher can be substituted without
//! touching any caller; substituting one changes the at-rest bytes but not
//! the [`LocalStore`](crate::store::LocalStore) API.

use std::fmt::Debug;

use base64ct::{Base64, Encoding};

use crate::store::errors::StoreError;

/// Reversible text transform applied to sensitive values before persistence.
pub trait ObfuscationCodec: Send + Sync + Debug {
    /// Encode serialized plaintext into its at-rest form.
    fn encode(&self, plain: &str) -> String;

    /// Reverse the at-rest transform.
    ///
    /// Failing here is not fatal to the caller: the store falls back to
    /// treating the stored text as plain serialization (values written before
    /// obfuscation was introduced) and then to the caller-supplied default.
    fn decode(&self, stored: &str) -> Result<String, StoreError>;
}

/// Base64 obfuscation of the serialized value's UTF-8 bytes.
///
/// Not cryptography; see the module docs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Codec;

impl ObfuscationCodec for Base64Codec {
    fn encode(&self, plain: &str) -> String {
        Base64::encode_string(plain.as_bytes())
    }

    fn decode(&self, stored: &str) -> Result<String, StoreError> {
        let bytes = Base64::decode_vec(stored).map_err(|_| StoreError::DecodeFailed {
            reason: "invalid base64".to_string(),
        })?;
        String::from_utf8(bytes).map_err(|_| StoreError::DecodeFailed {
            reason: "decoded bytes are not UTF-8".to_string(),
        })
    }
}
