//! Append-only catalog of published and uploaded books.
//!
//! Entries are never mutated or removed; the profile view only reads counts
//! and metadata. Ids are time-based but guaranteed strictly increasing
//! within a session even if the wall clock stalls or steps backwards.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::constants::BOOKS;
use crate::store::LocalStore;

/// How a catalog entry came to exist.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Written in the editor and published.
    Escrito,
    /// Sent through the upload boundary.
    Upload,
}

/// One published or uploaded book record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Time-based id, strictly increasing within a session.
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    /// Chapter count for written books.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapters: Option<usize>,
    /// File size in bytes for uploaded books.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub uploaded_at: String,
}

/// Append-only view over the `books` key.
#[derive(Debug)]
pub struct Catalog {
    store: LocalStore,
    clock: Arc<dyn Clock>,
    last_id: Mutex<i64>,
}

impl Catalog {
    /// Create a catalog handle.
    ///
    /// The id watermark is seeded from the highest stored id so that ids
    /// stay strictly increasing across handles within one session.
    pub fn new(store: LocalStore, clock: Arc<dyn Clock>) -> Self {
        let seed = store
            .load(BOOKS, Vec::<CatalogEntry>::new())
            .iter()
            .map(|entry| entry.id)
            .max()
            .unwrap_or(0);
        Self {
            store,
            clock,
            last_id: Mutex::new(seed),
        }
    }

    /// Append a record for a book written in the editor.
    pub fn append_written(
        &self,
        title: &str,
        author: &str,
        genre: &str,
        chapters: usize,
    ) -> CatalogEntry {
        self.push(title, author, genre, Some(chapters), None, EntryKind::Escrito)
    }

    /// Append a record for a book sent through the upload boundary.
    pub fn append_upload(&self, title: &str, author: &str, genre: &str, size: u64) -> CatalogEntry {
        self.push(title, author, genre, None, Some(size), EntryKind::Upload)
    }

    /// All catalog entries, oldest first.
    pub fn all(&self) -> Vec<CatalogEntry> {
        self.store.load(BOOKS, Vec::new())
    }

    /// Number of catalog entries.
    pub fn count(&self) -> usize {
        self.all().len()
    }

    fn push(
        &self,
        title: &str,
        author: &str,
        genre: &str,
        chapters: Option<usize>,
        size: Option<u64>,
        kind: EntryKind,
    ) -> CatalogEntry {
        let entry = CatalogEntry {
            id: self.next_id(),
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            chapters,
            size,
            kind,
            uploaded_at: self.clock.now_rfc3339(),
        };

        let mut books = self.all();
        books.push(entry.clone());
        self.store.save(BOOKS, &books);
        tracing::info!(id = entry.id, title, "Catalog entry appended");
        entry
    }

    /// Time-based id, bumped past the watermark when the clock does not
    /// move forward.
    fn next_id(&self) -> i64 {
        let now = self.clock.now_millis();
        let mut last = self.last_id.lock().unwrap();
        *last = if now > *last { now } else { *last + 1 };
        *last
    }
}
