//! Thoteca handle tests: theme, upload gating, persistence.

use thoteca::backend::{Backend, Memory};
use thoteca::upload::{UploadClient, UploadRequest};
use thoteca::{Theme, Thoteca};

use crate::helpers::*;

#[test]
fn theme_defaults_to_light_and_persists() {
    let (instance, _clock) = test_instance();
    assert_eq!(instance.theme(), Theme::Light);

    instance.set_theme(Theme::Dark);
    assert_eq!(instance.theme(), Theme::Dark);
}

#[test]
fn upload_requires_a_logged_in_session() {
    let (instance, _clock) = test_instance();

    // Client-side gate fires before any validation or network access.
    let client = UploadClient::new("http://127.0.0.1:1");
    let request = UploadRequest {
        title: "T".to_string(),
        author: "A".to_string(),
        genre: "G".to_string(),
        file: "missing.pdf".into(),
    };
    let err = instance.upload(&client, &request).expect_err("not logged in");
    assert!(matches!(
        err,
        thoteca::Error::Auth(thoteca::auth::AuthError::NotLoggedIn)
    ));
    assert_eq!(instance.catalog().count(), 0);
}

#[test]
fn state_survives_a_save_load_cycle() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("thoteca.json");

    let (instance, _clock) = logged_in_instance();
    let mut editor = instance.editor();
    editor.set_title("T");
    editor.add_chapter();
    editor.save_chapter("Intro", "Hello").expect("chapter");
    editor.publish(&instance.catalog()).expect("publish");
    instance.set_theme(Theme::Dark);

    let memory = instance
        .backend()
        .as_any()
        .downcast_ref::<Memory>()
        .expect("memory backend");
    memory.save_to_file(&path).expect("save");

    let reloaded = Thoteca::open(Box::new(Memory::load_from_file(&path).expect("load")));
    assert!(reloaded.current_user().logged);
    assert_eq!(reloaded.current_user().name, "reader1");
    assert_eq!(reloaded.catalog().count(), 1);
    assert_eq!(reloaded.theme(), Theme::Dark);
    // The published draft stays reset after the round trip.
    assert_eq!(reloaded.editor().draft().chapters.len(), 0);
}
