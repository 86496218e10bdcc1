//! Draft manager: the single work-in-progress book and its chapter editor.
//!
//! The draft is persisted continuously: every field change and every chapter
//! save writes the whole record back through the store, so there is no
//! separate dirty state to flush. The chapter sub-editor is the only
//! in-memory state the editor holds: which slot is open, if any.
//!
//! State machine:
//!
//! ```text
//! Idle ──add_chapter──────────► Editing(New)
//! any  ──open_chapter(i)──────► Editing(Existing(i))
//! Editing ──save_chapter──────► Idle   (appends or replaces, persists)
//! Editing ──cancel_chapter────► Idle   (discards unsaved fields only)
//! ```
//!
//! `export` and `publish` are terminal transitions: export renders the flat
//! text layout, publish appends a catalog record and resets the draft.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::catalog::{Catalog, CatalogEntry};
use crate::clock::Clock;
use crate::constants::CURRENT_BOOK;
use crate::sanitize::{Escaped, SNIPPET_MAX, snippet};
use crate::store::LocalStore;

pub mod errors;
mod export;

pub use errors::EditorError;
pub use export::Export;

/// Maximum chapter content length in characters.
pub const MAX_CHAPTER_CONTENT: usize = 10_000;

/// One chapter of the draft. Order in the parent vector is reading order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub title: String,
    pub content: String,
    pub created_at: String,
}

impl Chapter {
    /// Escaped preview of the content, capped at [`SNIPPET_MAX`] characters.
    pub fn snippet(&self) -> String {
        snippet(&self.content, SNIPPET_MAX)
    }

    /// Whitespace-delimited word count of the content.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

/// The singleton work-in-progress book.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub chapters: Vec<Chapter>,
}

impl Draft {
    /// A fresh draft attributed to `author`.
    pub fn for_author(author: &str) -> Self {
        Self {
            author: author.to_string(),
            ..Self::default()
        }
    }

    /// Total word count across all chapters.
    pub fn word_count(&self) -> usize {
        self.chapters.iter().map(Chapter::word_count).sum()
    }
}

/// Which chapter slot the sub-editor has open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChapterSlot {
    /// Composing a chapter that does not exist yet.
    New,
    /// Editing the chapter at this index.
    Existing(usize),
}

/// Editor state: either no chapter is open, or one slot is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorState {
    Idle,
    Editing(ChapterSlot),
}

/// Handle over the persisted draft plus the volatile sub-editor state.
#[derive(Debug)]
pub struct DraftEditor {
    store: LocalStore,
    clock: Arc<dyn Clock>,
    default_author: String,
    state: EditorState,
}

impl DraftEditor {
    /// Create an editor. `default_author` attributes a draft that does not
    /// exist yet; an already-persisted draft keeps its stored author.
    pub fn new(store: LocalStore, clock: Arc<dyn Clock>, default_author: &str) -> Self {
        Self {
            store,
            clock,
            default_author: default_author.to_string(),
            state: EditorState::Idle,
        }
    }

    /// The current sub-editor state.
    pub fn state(&self) -> EditorState {
        self.state
    }

    /// The persisted draft (or a fresh one attributed to the default author).
    pub fn draft(&self) -> Draft {
        self.store
            .load(CURRENT_BOOK, Draft::for_author(&self.default_author))
    }

    /// Open the sub-editor on a new, empty chapter.
    pub fn add_chapter(&mut self) {
        self.state = EditorState::Editing(ChapterSlot::New);
    }

    /// Open the sub-editor on chapter `index`, returning it for field
    /// loading.
    pub fn open_chapter(&mut self, index: usize) -> Result<Chapter> {
        let draft = self.draft();
        let chapter = draft
            .chapters
            .get(index)
            .cloned()
            .ok_or(EditorError::ChapterNotFound {
                index,
                count: draft.chapters.len(),
            })?;
        self.state = EditorState::Editing(ChapterSlot::Existing(index));
        Ok(chapter)
    }

    /// Commit the open sub-editor slot.
    ///
    /// Content must be non-empty after trimming and at most
    /// [`MAX_CHAPTER_CONTENT`] characters. A blank title falls back to the
    /// positional `"Chapter {n}"` name. On success the sub-editor closes and
    /// the draft is persisted.
    pub fn save_chapter(&mut self, title: &str, content: &str) -> Result<Chapter> {
        let slot = match self.state {
            EditorState::Editing(slot) => slot,
            EditorState::Idle => return Err(EditorError::NoChapterOpen.into()),
        };

        let content = content.trim();
        if content.is_empty() {
            return Err(EditorError::EmptyContent.into());
        }
        let len = content.chars().count();
        if len > MAX_CHAPTER_CONTENT {
            return Err(EditorError::ContentTooLong {
                len,
                max: MAX_CHAPTER_CONTENT,
            }
            .into());
        }

        let mut draft = self.draft();
        let title = title.trim();
        let chapter = Chapter {
            title: if title.is_empty() {
                format!("Chapter {}", draft.chapters.len() + 1)
            } else {
                title.to_string()
            },
            content: content.to_string(),
            created_at: self.clock.now_rfc3339(),
        };

        match slot {
            ChapterSlot::New => draft.chapters.push(chapter.clone()),
            ChapterSlot::Existing(index) => {
                let count = draft.chapters.len();
                let target = draft
                    .chapters
                    .get_mut(index)
                    .ok_or(EditorError::ChapterNotFound { index, count })?;
                *target = chapter.clone();
            }
        }

        self.store.save(CURRENT_BOOK, &draft);
        self.state = EditorState::Idle;
        Ok(chapter)
    }

    /// Close the sub-editor, discarding unsaved fields. Persisted chapters
    /// are unaffected.
    pub fn cancel_chapter(&mut self) {
        self.state = EditorState::Idle;
    }

    /// Remove chapter `index`, shifting later chapters down.
    ///
    /// Confirmation is an external yes/no gate owned by the caller; once
    /// invoked, the removal is unconditional.
    pub fn delete_chapter(&mut self, index: usize) -> Result<Chapter> {
        let mut draft = self.draft();
        if index >= draft.chapters.len() {
            return Err(EditorError::ChapterNotFound {
                index,
                count: draft.chapters.len(),
            }
            .into());
        }
        let removed = draft.chapters.remove(index);
        self.store.save(CURRENT_BOOK, &draft);
        Ok(removed)
    }

    /// Set the book title; persists immediately.
    pub fn set_title(&self, title: &str) {
        let mut draft = self.draft();
        draft.title = title.to_string();
        self.store.save(CURRENT_BOOK, &draft);
    }

    /// Set the author; persists immediately.
    pub fn set_author(&self, author: &str) {
        let mut draft = self.draft();
        draft.author = author.to_string();
        self.store.save(CURRENT_BOOK, &draft);
    }

    /// Set the genre; persists immediately.
    pub fn set_genre(&self, genre: &str) {
        let mut draft = self.draft();
        draft.genre = genre.to_string();
        self.store.save(CURRENT_BOOK, &draft);
    }

    /// Confirm the draft is saved.
    ///
    /// The draft is persisted continuously, so this only validates that a
    /// title exists; it writes nothing.
    pub fn save_draft(&self) -> Result<()> {
        if self.draft().title.is_empty() {
            return Err(EditorError::MissingTitle.into());
        }
        Ok(())
    }

    /// Render the draft as a markup fragment with every user-supplied string
    /// escaped.
    pub fn preview(&self) -> Result<String> {
        let draft = self.draft();
        if draft.chapters.is_empty() {
            return Err(EditorError::EmptyDraft.into());
        }

        let title = or_fallback(&draft.title, "Sem Título");
        let author = or_fallback(&draft.author, "Anônimo");
        let genre = or_fallback(&draft.genre, "Sem Gênero");

        let mut markup = format!(
            "<h1>{}</h1>\n<p>por {} • {}</p>\n<hr>\n",
            Escaped(title),
            Escaped(author),
            Escaped(genre),
        );
        for (index, chapter) in draft.chapters.iter().enumerate() {
            let heading = export::chapter_heading(chapter, index);
            markup.push_str(&format!(
                "<h2>{}</h2>\n<div>{}</div>\n",
                Escaped(&heading),
                Escaped(&chapter.content),
            ));
        }
        Ok(markup)
    }

    /// Render the flat-text export and its filename.
    pub fn export(&self) -> Result<Export> {
        let draft = self.draft();
        if draft.chapters.is_empty() {
            return Err(EditorError::EmptyDraft.into());
        }
        Ok(Export {
            filename: export::filename(&draft.title),
            content: export::render_text(&draft),
        })
    }

    /// Publish the draft: append a catalog record and reset the draft to an
    /// empty instance.
    pub fn publish(&mut self, catalog: &Catalog) -> Result<CatalogEntry> {
        let draft = self.draft();
        if draft.title.is_empty() {
            return Err(EditorError::MissingTitle.into());
        }
        if draft.chapters.is_empty() {
            return Err(EditorError::EmptyDraft.into());
        }

        let entry = catalog.append_written(
            &draft.title,
            &draft.author,
            &draft.genre,
            draft.chapters.len(),
        );
        self.store.save(CURRENT_BOOK, &Draft::default());
        self.state = EditorState::Idle;
        tracing::info!(title = %draft.title, chapters = draft.chapters.len(), "Draft published");
        Ok(entry)
    }
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
