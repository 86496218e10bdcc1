//! Draft state machine, export, and publish tests.

use thoteca::catalog::EntryKind;
use thoteca::editor::{
    ChapterSlot, Draft, DraftEditor, EditorError, EditorState, MAX_CHAPTER_CONTENT,
};
use thoteca::Error;

use crate::helpers::*;

/// Editor with a two-chapter fixture: one titled, one with the fallback name.
fn two_chapter_editor(instance: &thoteca::Thoteca) -> DraftEditor {
    let mut editor = instance.editor();
    editor.set_title("T");
    editor.set_author("A");
    editor.set_genre("G");
    editor.add_chapter();
    editor.save_chapter("Intro", "Hello").expect("first chapter");
    editor.add_chapter();
    editor.save_chapter("", "World").expect("second chapter");
    editor
}

#[test]
fn empty_content_is_rejected_without_mutation() {
    let (instance, _clock) = logged_in_instance();
    let mut editor = instance.editor();

    editor.add_chapter();
    let err = editor.save_chapter("", "   ").expect_err("blank content");
    assert!(err.is_validation());
    assert_eq!(editor.draft().chapters.len(), 0);
    // The sub-editor stays open; only a successful save closes it.
    assert_eq!(editor.state(), EditorState::Editing(ChapterSlot::New));
}

#[test]
fn content_length_cap() {
    let (instance, _clock) = logged_in_instance();
    let mut editor = instance.editor();

    editor.add_chapter();
    let too_long = "x".repeat(MAX_CHAPTER_CONTENT + 1);
    let err = editor.save_chapter("", &too_long).expect_err("over the cap");
    assert!(matches!(
        err,
        Error::Editor(EditorError::ContentTooLong { .. })
    ));

    let at_cap = "x".repeat(MAX_CHAPTER_CONTENT);
    editor.save_chapter("", &at_cap).expect("exactly at the cap");
}

#[test]
fn chapters_append_in_order_with_title_fallback() {
    let (instance, _clock) = logged_in_instance();
    let editor = two_chapter_editor(&instance);

    let draft = editor.draft();
    assert_eq!(draft.chapters.len(), 2);
    assert_eq!(draft.chapters[0].title, "Intro");
    assert_eq!(draft.chapters[0].content, "Hello");
    assert_eq!(draft.chapters[1].title, "Chapter 2");
    assert_eq!(draft.chapters[1].content, "World");
}

#[test]
fn save_requires_an_open_sub_editor() {
    let (instance, _clock) = logged_in_instance();
    let mut editor = instance.editor();

    let err = editor
        .save_chapter("Intro", "Hello")
        .expect_err("nothing open");
    assert!(matches!(err, Error::Editor(EditorError::NoChapterOpen)));
}

#[test]
fn open_chapter_out_of_range_is_not_found() {
    let (instance, _clock) = logged_in_instance();
    let mut editor = instance.editor();

    let err = editor.open_chapter(0).expect_err("no chapters yet");
    assert!(err.is_not_found());
}

#[test]
fn editing_replaces_in_place() {
    let (instance, _clock) = logged_in_instance();
    let mut editor = two_chapter_editor(&instance);

    let opened = editor.open_chapter(0).expect("open");
    assert_eq!(opened.title, "Intro");

    editor
        .save_chapter("Prólogo", "Hello again")
        .expect("replace");
    let draft = editor.draft();
    assert_eq!(draft.chapters.len(), 2);
    assert_eq!(draft.chapters[0].title, "Prólogo");
    assert_eq!(draft.chapters[0].content, "Hello again");
    assert_eq!(draft.chapters[1].content, "World");
}

#[test]
fn delete_shifts_later_chapters_down() {
    let (instance, _clock) = logged_in_instance();
    let mut editor = two_chapter_editor(&instance);
    editor.add_chapter();
    editor.save_chapter("Fim", "The end").expect("third chapter");

    editor.delete_chapter(1).expect("delete the middle");
    let draft = editor.draft();
    assert_eq!(draft.chapters.len(), 2);
    assert_eq!(draft.chapters[0].title, "Intro");
    assert_eq!(draft.chapters[1].title, "Fim");

    let err = editor.delete_chapter(5).expect_err("out of range");
    assert!(err.is_not_found());
}

#[test]
fn cancel_discards_only_unsaved_state() {
    let (instance, _clock) = logged_in_instance();
    let mut editor = two_chapter_editor(&instance);

    editor.add_chapter();
    editor.cancel_chapter();
    assert_eq!(editor.state(), EditorState::Idle);
    assert_eq!(editor.draft().chapters.len(), 2);
}

#[test]
fn field_changes_persist_immediately() {
    let (instance, _clock) = logged_in_instance();
    let editor = instance.editor();
    editor.set_title("Aventuras");
    editor.set_genre("Fantasia");

    // A separate handle sees the persisted fields.
    let other = instance.editor();
    let draft = other.draft();
    assert_eq!(draft.title, "Aventuras");
    assert_eq!(draft.genre, "Fantasia");
}

#[test]
fn fresh_draft_is_attributed_to_the_session_user() {
    let (instance, _clock) = logged_in_instance();
    assert_eq!(instance.editor().draft().author, "reader1");
}

#[test]
fn save_draft_requires_a_title() {
    let (instance, _clock) = logged_in_instance();
    let editor = instance.editor();

    let err = editor.save_draft().expect_err("no title yet");
    assert!(err.is_validation());

    editor.set_title("T");
    editor.save_draft().expect("title present");
}

#[test]
fn export_layout_is_byte_exact() {
    let (instance, _clock) = logged_in_instance();
    let editor = two_chapter_editor(&instance);

    let export = editor.export().expect("export");
    let expected = format!(
        "T\nPor A\nGenre: G\n\n{}\n\n\n\nIntro\n\nHello\n\n\nChapter 2\n\nWorld\n",
        "=".repeat(50)
    );
    assert_eq!(export.content, expected);
    assert_eq!(export.filename, "T.txt");
}

#[test]
fn export_filename_strips_non_word_characters() {
    let (instance, _clock) = logged_in_instance();
    let mut editor = instance.editor();
    editor.set_title("Aventuras no Espaço!");
    editor.add_chapter();
    editor.save_chapter("", "corpo").expect("chapter");

    let export = editor.export().expect("export");
    assert_eq!(export.filename, "AventurasnoEspao.txt");
}

#[test]
fn export_with_no_chapters_is_an_empty_draft_error() {
    let (instance, _clock) = logged_in_instance();
    let editor = instance.editor();
    editor.set_title("T");

    let err = editor.export().expect_err("no chapters");
    assert!(err.is_empty_draft());
}

#[test]
fn publish_appends_one_entry_and_resets_the_draft() {
    let (instance, _clock) = logged_in_instance();
    let mut editor = two_chapter_editor(&instance);

    let entry = editor.publish(&instance.catalog()).expect("publish");
    assert_eq!(entry.title, "T");
    assert_eq!(entry.chapters, Some(2));
    assert_eq!(entry.size, None);
    assert_eq!(entry.kind, EntryKind::Escrito);

    assert_eq!(instance.catalog().count(), 1);
    // Everything resets, including the author.
    assert_eq!(editor.draft(), Draft::default());
}

#[test]
fn publish_requires_title_and_chapters() {
    let (instance, _clock) = logged_in_instance();
    let mut editor = instance.editor();
    editor.add_chapter();
    editor.save_chapter("Intro", "Hello").expect("chapter");

    let err = editor
        .publish(&instance.catalog())
        .expect_err("missing title");
    assert!(err.is_validation());

    editor.set_title("T");
    editor.delete_chapter(0).expect("delete");
    let err = editor
        .publish(&instance.catalog())
        .expect_err("no chapters");
    assert!(err.is_empty_draft());
    assert_eq!(instance.catalog().count(), 0);
}

#[test]
fn preview_escapes_user_supplied_text() {
    let (instance, _clock) = logged_in_instance();
    let mut editor = instance.editor();
    editor.set_title("<b>T</b>");
    editor.add_chapter();
    editor
        .save_chapter("Intro", "<script>alert('x')</script>")
        .expect("chapter");

    let markup = editor.preview().expect("preview");
    assert!(!markup.contains("<script>"));
    assert!(markup.contains("&lt;script&gt;"));
    assert!(markup.contains("&lt;b&gt;T&lt;/b&gt;"));
}

#[test]
fn preview_with_no_chapters_is_an_empty_draft_error() {
    let (instance, _clock) = logged_in_instance();
    let err = instance.editor().preview().expect_err("empty draft");
    assert!(err.is_empty_draft());
}

#[test]
fn word_count_sums_chapters() {
    let (instance, _clock) = logged_in_instance();
    let editor = two_chapter_editor(&instance);
    // "Hello" + "World"
    assert_eq!(editor.draft().word_count(), 2);
}
