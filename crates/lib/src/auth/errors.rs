//! Error types for the credential ledger and session guard.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Username does not match `[A-Za-z0-9_]{3,20}`
    #[error("Invalid username: must be 3-20 letters, digits, or underscores")]
    InvalidUsername,

    /// Password shorter than the minimum length
    #[error("Password too short: minimum {min} characters")]
    PasswordTooShort { min: usize },

    /// Password did not match the stored hash
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Too many failed attempts this session
    #[error("Account locked after {attempts} failed login attempts")]
    LockedOut { attempts: u32 },

    /// Operation requires a logged-in session
    #[error("Not logged in")]
    NotLoggedIn,
}

impl AuthError {
    /// Check if this error is a local input-validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidUsername | AuthError::PasswordTooShort { .. }
        )
    }

    /// Check if this error is the throttle lockout.
    pub fn is_locked_out(&self) -> bool {
        matches!(self, AuthError::LockedOut { .. })
    }
}

impl From<AuthError> for crate::Error {
    fn from(err: AuthError) -> Self {
        crate::Error::Auth(err)
    }
}
