//! Markup escaping for user-supplied text.
//!
//! Every string that originated from user input (usernames, titles, authors,
//! genres, chapter titles, content, snippets) passes through [`escape`] or
//! the [`Escaped`] adapter before it is composed into rendered markup.
//!
//! Escaping is structural: a `fmt::Display` writer dispatches on each
//! character, so there is no pattern-replacement pass that a crafted input
//! could slip through by double-encoding.

use std::fmt;

/// Maximum character length of a chapter preview snippet.
pub const SNIPPET_MAX: usize = 80;

/// Display adapter that writes `text` with markup-significant characters
/// replaced by entities.
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut last = 0;
        for (i, c) in self.0.char_indices() {
            let entity = match c {
                '&' => "&amp;",
                '<' => "&lt;",
                '>' => "&gt;",
                '"' => "&quot;",
                '\'' => "&#x27;",
                _ => continue,
            };
            f.write_str(&self.0[last..i])?;
            f.write_str(entity)?;
            last = i + c.len_utf8();
        }
        f.write_str(&self.0[last..])
    }
}

/// Escape `text` so it contains no characters interpretable as markup.
pub fn escape(text: &str) -> String {
    Escaped(text).to_string()
}

/// Truncated, escaped preview of `text`.
///
/// Truncation happens on a character boundary before escaping; the ellipsis
/// is appended outside the escaped span, and only when truncation occurred.
pub fn snippet(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", Escaped(&text[..cut])),
        None => escape(text),
    }
}
