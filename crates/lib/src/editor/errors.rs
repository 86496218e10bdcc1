//! Error types for the draft editor.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    /// Chapter content was empty after trimming
    #[error("Chapter content cannot be empty")]
    EmptyContent,

    /// Chapter content exceeded the length cap
    #[error("Chapter content too long: {len} characters (maximum {max})")]
    ContentTooLong { len: usize, max: usize },

    /// A chapter index outside the current list
    #[error("Chapter {index} not found (draft has {count} chapters)")]
    ChapterNotFound { index: usize, count: usize },

    /// A chapter operation that requires an open sub-editor
    #[error("No chapter is open for editing")]
    NoChapterOpen,

    /// The draft needs a title for this operation
    #[error("The book needs a title")]
    MissingTitle,

    /// Export, preview, or publish on a draft with no chapters
    #[error("The draft has no chapters")]
    EmptyDraft,
}

impl EditorError {
    /// Check if this error is a local input-validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EditorError::EmptyContent
                | EditorError::ContentTooLong { .. }
                | EditorError::MissingTitle
                | EditorError::NoChapterOpen
        )
    }

    /// Check if this error indicates a chapter was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, EditorError::ChapterNotFound { .. })
    }

    /// Check if this error is the empty-draft terminal-transition failure.
    pub fn is_empty_draft(&self) -> bool {
        matches!(self, EditorError::EmptyDraft)
    }
}

impl From<EditorError> for crate::Error {
    fn from(err: EditorError) -> Self {
        crate::Error::Editor(err)
    }
}
