//!
//! Thoteca: a local-first book writing and sharing core.
//! This library provides the state, storage, and editing model behind the
//! Thoteca client, with no network dependency outside the explicit upload
//! boundary.
//!
//! ## Core Concepts
//!
//! * **Backends (`backend::Backend`)**: A pluggable raw key/value storage
//!   layer; [`backend::Memory`] keeps everything in a map and persists the
//!   whole state as a JSON file.
//! * **LocalStore (`store::LocalStore`)**: The typed store every component
//!   writes through. Values for sensitive keys are obfuscated at rest behind
//!   the [`store::ObfuscationCodec`] seam; loads and saves never fail to the
//!   caller.
//! * **Credential Ledger (`auth::CredentialLedger`)**: Local accounts with
//!   registration-on-first-login, a deterministic (intentionally weak)
//!   password transform, and a volatile login throttle
//!   ([`auth::SessionGuard`]).
//! * **Draft Editor (`editor::DraftEditor`)**: The single work-in-progress
//!   book, its chapter sub-editor state machine, and the export/publish
//!   terminal transitions.
//! * **Catalog (`catalog::Catalog`)**: Append-only record of published and
//!   uploaded books with strictly increasing time-based ids.
//! * **Sanitizer (`sanitize`)**: Structural markup escaping applied to every
//!   user-supplied string before it reaches a render target.
//! * **Instance (`instance::Thoteca`)**: The context object that owns the
//!   backend, store, clock, and guard, and hands out component handles.

pub mod auth;
pub mod backend;
pub mod catalog;
pub mod clock;
pub mod constants;
pub mod editor;
pub mod instance;
pub mod sanitize;
pub mod store;
pub mod upload;

pub use clock::{Clock, SystemClock};
pub use instance::{Theme, Thoteca};

#[cfg(any(test, feature = "testing"))]
pub use clock::FixedClock;

/// Result type used throughout the Thoteca library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Thoteca library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured authentication errors from the auth module
    #[error(transparent)]
    Auth(auth::AuthError),

    /// Structured storage errors from the backend module
    #[error(transparent)]
    Backend(backend::BackendError),

    /// Structured store errors from the store module
    #[error(transparent)]
    Store(store::StoreError),

    /// Structured editor errors from the editor module
    #[error(transparent)]
    Editor(editor::EditorError),

    /// Structured upload-boundary errors from the upload module
    #[error(transparent)]
    Upload(upload::UploadError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Auth(_) => "auth",
            Error::Backend(_) => "backend",
            Error::Store(_) => "store",
            Error::Editor(_) => "editor",
            Error::Upload(_) => "upload",
        }
    }

    /// Check if this error is a local input-validation failure.
    pub fn is_validation(&self) -> bool {
        match self {
            Error::Auth(auth_err) => auth_err.is_validation(),
            Error::Editor(editor_err) => editor_err.is_validation(),
            _ => false,
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Editor(editor_err) => editor_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is the login-throttle lockout.
    pub fn is_locked_out(&self) -> bool {
        match self {
            Error::Auth(auth_err) => auth_err.is_locked_out(),
            _ => false,
        }
    }

    /// Check if this error is an export/preview/publish on an empty draft.
    pub fn is_empty_draft(&self) -> bool {
        match self {
            Error::Editor(editor_err) => editor_err.is_empty_draft(),
            _ => false,
        }
    }
}
