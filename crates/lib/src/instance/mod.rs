//! The application-state handle.
//!
//! [`Thoteca`] replaces the source system's ambient fixed-key globals with an
//! explicit context object: it owns the backend, the obfuscated store, the
//! clock, and the session-wide throttle guard, and constructs the component
//! handles that operate on them. Everything a caller does goes through an
//! instance; no component reaches for global state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::auth::{AuthError, CredentialLedger, SessionGuard, SessionUser};
use crate::backend::Backend;
use crate::catalog::{Catalog, CatalogEntry};
use crate::clock::{Clock, SystemClock};
use crate::constants::THEME;
use crate::editor::DraftEditor;
use crate::store::LocalStore;
use crate::upload::{UploadClient, UploadRequest};

/// UI theme preference, persisted at the `theme` key.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Handle to one Thoteca application state.
#[derive(Clone)]
pub struct Thoteca {
    backend: Arc<dyn Backend>,
    store: LocalStore,
    clock: Arc<dyn Clock>,
    guard: Arc<SessionGuard>,
}

impl Thoteca {
    /// Open an instance over the given backend with the system clock.
    pub fn open(backend: Box<dyn Backend>) -> Self {
        Self::build(Arc::from(backend), Arc::new(SystemClock))
    }

    /// Open an instance with an injected clock. Testing hook.
    #[cfg(any(test, feature = "testing"))]
    pub fn open_with_clock(backend: Box<dyn Backend>, clock: Arc<dyn Clock>) -> Self {
        Self::build(Arc::from(backend), clock)
    }

    fn build(backend: Arc<dyn Backend>, clock: Arc<dyn Clock>) -> Self {
        let store = LocalStore::new(backend.clone());
        Self {
            backend,
            store,
            clock,
            guard: Arc::new(SessionGuard::new()),
        }
    }

    /// The underlying backend, for persistence and downcasting.
    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }

    /// The obfuscated store shared by every component handle.
    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    /// Credential ledger sharing this instance's throttle guard.
    pub fn ledger(&self) -> CredentialLedger {
        CredentialLedger::new(self.store.clone(), self.clock.clone(), self.guard.clone())
    }

    /// Log in as `username`, registering the account on first sight.
    pub fn login(&self, username: &str, password: &str) -> Result<SessionUser> {
        self.ledger().register_or_verify(username, password)
    }

    /// Drop the session back to the visitor identity.
    pub fn logout(&self) {
        self.ledger().logout();
    }

    /// The current session identity.
    pub fn current_user(&self) -> SessionUser {
        self.ledger().current_user()
    }

    /// Draft editor attributed to the current session user.
    pub fn editor(&self) -> DraftEditor {
        let author = self.current_user().name;
        DraftEditor::new(self.store.clone(), self.clock.clone(), &author)
    }

    /// Catalog of published and uploaded books.
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.store.clone(), self.clock.clone())
    }

    /// Send a file through the upload boundary and record it in the catalog.
    ///
    /// Requires a logged-in session, matching the upload view's gate.
    pub fn upload(&self, client: &UploadClient, request: &UploadRequest) -> Result<CatalogEntry> {
        let user = self.current_user();
        if !user.logged {
            return Err(AuthError::NotLoggedIn.into());
        }

        let book = client.send(request)?;
        let entry = self.catalog().append_upload(
            &book.title,
            &book.author,
            &book.genre,
            book.size.unwrap_or(0),
        );
        Ok(entry)
    }

    /// The persisted theme preference.
    pub fn theme(&self) -> Theme {
        self.store.load(THEME, Theme::default())
    }

    /// Persist the theme preference.
    pub fn set_theme(&self, theme: Theme) {
        self.store.save(THEME, &theme);
    }
}

impl std::fmt::Debug for Thoteca {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Thoteca")
            .field("clock", &self.clock)
            .field("guard", &self.guard)
            .finish_non_exhaustive()
    }
}
