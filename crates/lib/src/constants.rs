//! Constants used throughout the Thoteca library.
//!
//! This module provides central definitions for internal strings and other
//! constants used within the library, especially for reserved storage keys.

/// Storage key for the singleton session identity record.
pub const USER: &str = "user";

/// Storage key for the username -> stored-user credential mapping.
pub const USERS: &str = "users";

/// Storage key for the singleton work-in-progress draft.
pub const CURRENT_BOOK: &str = "currentBook";

/// Storage key for the append-only catalog of published and uploaded books.
pub const BOOKS: &str = "books";

/// Storage key for the UI theme preference.
pub const THEME: &str = "theme";

/// Keys whose values are obfuscated before they touch persistent storage.
pub const SENSITIVE_KEYS: &[&str] = &[USER, USERS];

/// Display name used for the session identity when nobody is logged in.
pub const VISITOR_NAME: &str = "Visitante";

/// The curated genre list offered by the editor and upload form.
pub const GENRES: &[&str] = &[
    "Ficção Científica",
    "Fantasia",
    "Mistério",
    "Romance",
    "Tecnologia",
    "Autoajuda",
    "História",
    "Poesia",
];
