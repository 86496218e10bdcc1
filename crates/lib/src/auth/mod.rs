//! Credential ledger and session model.
//!
//! Accounts are local: a username maps to a [`StoredUser`] record in the
//! obfuscated store, created the first time that username successfully logs
//! in. There is no separate registration flow and no password-change flow;
//! the first-seen password hash is first-write-wins.
//!
//! The singleton [`SessionUser`] record tracks the current identity. When
//! nobody is logged in it holds the visitor default.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::clock::Clock;
use crate::constants::{USER, USERS, VISITOR_NAME};
use crate::store::LocalStore;

pub mod errors;
mod hash;
mod session;

pub use errors::AuthError;
pub use hash::{PasswordHasher, SaltedEncoding};
pub use session::{MAX_LOGIN_ATTEMPTS, SessionGuard};

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 6;

/// Username length bounds.
const USERNAME_LEN: std::ops::RangeInclusive<usize> = 3..=20;

/// A registered account, keyed by username in the ledger mapping.
///
/// Immutable after creation: no overwrite path for the hash exists.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    /// Output of the [`PasswordHasher`] seam for this account's password.
    pub password_hash: String,
    /// RFC3339 timestamp of the account's first login.
    pub joined: String,
}

/// The singleton current-identity record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub name: String,
    pub logged: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined: Option<String>,
}

impl SessionUser {
    /// The logged-out default identity.
    pub fn visitor() -> Self {
        Self {
            name: VISITOR_NAME.to_string(),
            logged: false,
            joined: None,
        }
    }

    /// Two-letter avatar initials, uppercased.
    pub fn avatar(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }
}

impl Default for SessionUser {
    fn default() -> Self {
        Self::visitor()
    }
}

/// Username -> account mapping persisted at the sensitive `users` key.
pub type UserLedger = BTreeMap<String, StoredUser>;

/// Registration-on-first-login credential store.
#[derive(Debug, Clone)]
pub struct CredentialLedger {
    store: LocalStore,
    clock: Arc<dyn Clock>,
    guard: Arc<SessionGuard>,
    hasher: Arc<dyn PasswordHasher>,
}

impl CredentialLedger {
    /// Create a ledger over `store` sharing the instance-wide `guard`.
    pub fn new(store: LocalStore, clock: Arc<dyn Clock>, guard: Arc<SessionGuard>) -> Self {
        Self::with_hasher(store, clock, guard, Arc::new(SaltedEncoding))
    }

    /// Create a ledger with a custom password hashing implementation.
    pub fn with_hasher(
        store: LocalStore,
        clock: Arc<dyn Clock>,
        guard: Arc<SessionGuard>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            store,
            clock,
            guard,
            hasher,
        }
    }

    /// Log in as `username`, registering the account on first sight.
    ///
    /// Order of checks: lockout, input validation, then ledger access.
    /// Validation failures change no state and do not touch the throttle
    /// counter; a hash mismatch increments it; success resets it and
    /// overwrites the singleton session record.
    pub fn register_or_verify(&self, username: &str, password: &str) -> Result<SessionUser> {
        if self.guard.is_locked() {
            return Err(AuthError::LockedOut {
                attempts: self.guard.attempts(),
            }
            .into());
        }

        validate_username(username)?;
        validate_password(password)?;

        let hash = self.hasher.hash(password);
        let mut users: UserLedger = self.store.load(USERS, UserLedger::new());

        let session = match users.get(username) {
            None => {
                let joined = self.clock.now_rfc3339();
                users.insert(
                    username.to_string(),
                    StoredUser {
                        password_hash: hash,
                        joined: joined.clone(),
                    },
                );
                self.store.save(USERS, &users);
                tracing::info!(username, "Registered new reader on first login");
                SessionUser {
                    name: username.to_string(),
                    logged: true,
                    joined: Some(joined),
                }
            }
            Some(stored) => {
                if stored.password_hash != hash {
                    self.guard.record_failure();
                    tracing::warn!(
                        username,
                        attempts = self.guard.attempts(),
                        "Failed login attempt"
                    );
                    return Err(AuthError::InvalidCredentials.into());
                }
                SessionUser {
                    name: username.to_string(),
                    logged: true,
                    joined: Some(stored.joined.clone()),
                }
            }
        };

        self.guard.reset();
        self.store.save(USER, &session);
        Ok(session)
    }

    /// Replace the session record with the visitor default.
    pub fn logout(&self) {
        self.store.save(USER, &SessionUser::visitor());
    }

    /// The current session identity, defaulting to the visitor.
    pub fn current_user(&self) -> SessionUser {
        self.store.load(USER, SessionUser::visitor())
    }

    /// The shared throttle guard.
    pub fn guard(&self) -> &SessionGuard {
        &self.guard
    }
}

fn validate_username(username: &str) -> std::result::Result<(), AuthError> {
    let valid_chars = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !USERNAME_LEN.contains(&username.len()) || !valid_chars {
        return Err(AuthError::InvalidUsername);
    }
    Ok(())
}

fn validate_password(password: &str) -> std::result::Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AuthError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}
