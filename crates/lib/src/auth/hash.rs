//! Password hashing seam.
//!
//! The default implementation reproduces the source system's scheme exactly:
//! a fixed salt appended to the password, then a printable encoding of the
//! result. It is deterministic and trivially reversible, **not** a password
//! hash in any cryptographic sense, and the ledger's stored records depend
//! on that observable behavior. Deployments that need real security
//! substitute a proper password hashing function through [`PasswordHasher`]
//! without touching the ledger.

use std::fmt::Debug;

use base64ct::{Base64, Encoding};

/// Fixed salt appended to every password before encoding.
const FIXED_SALT: &str = "thoteca_local_v1";

/// Deterministic password-to-hash transform used by the credential ledger.
pub trait PasswordHasher: Send + Sync + Debug {
    /// Derive the stored hash for `password`.
    fn hash(&self, password: &str) -> String;
}

/// The source-compatible "salting + encoding" transform. Not a real hash;
/// see the module docs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaltedEncoding;

impl PasswordHasher for SaltedEncoding {
    fn hash(&self, password: &str) -> String {
        let salted = format!("{password}{FIXED_SALT}");
        Base64::encode_string(salted.as_bytes())
    }
}
