//! Flat-text export rendering.
//!
//! The layout is part of the external interface and must reproduce
//! byte-for-byte: title line, author line, genre line, blank line, a 50-`=`
//! separator, then each chapter as two blank-line-separated blocks.

use crate::editor::{Chapter, Draft};

/// Width of the `=` separator under the header block.
const SEPARATOR_WIDTH: usize = 50;

/// Fallback filename stem when the title strips down to nothing.
const DEFAULT_FILE_STEM: &str = "meu-livro";

/// A rendered export: the file contents plus a filesystem-safe name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Export {
    pub filename: String,
    pub content: String,
}

/// Chapter heading with the positional fallback.
pub(crate) fn chapter_heading(chapter: &Chapter, index: usize) -> String {
    if chapter.title.is_empty() {
        format!("Chapter {}", index + 1)
    } else {
        chapter.title.clone()
    }
}

pub(crate) fn render_text(draft: &Draft) -> String {
    let title = non_empty(&draft.title, "Sem Título");
    let author = non_empty(&draft.author, "Anônimo");
    let genre = non_empty(&draft.genre, "Não especificado");

    let mut text = format!("{title}\nPor {author}\nGenre: {genre}\n\n");
    text.push_str(&"=".repeat(SEPARATOR_WIDTH));
    text.push_str("\n\n");

    for (index, chapter) in draft.chapters.iter().enumerate() {
        text.push_str(&format!("\n\n{}\n\n", chapter_heading(chapter, index)));
        text.push_str(&chapter.content);
        text.push('\n');
    }

    text
}

/// Title stripped to `[A-Za-z0-9_-]` plus the `.txt` extension.
pub(crate) fn filename(title: &str) -> String {
    let stem: String = title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    if stem.is_empty() {
        format!("{DEFAULT_FILE_STEM}.txt")
    } else {
        format!("{stem}.txt")
    }
}

fn non_empty<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
