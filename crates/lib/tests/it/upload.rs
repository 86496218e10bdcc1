//! Upload boundary client-side validation tests.
//!
//! These never reach the network: validation rejects the file before any
//! request is built, so an unroutable server URL is safe here.

use std::fs;

use thoteca::upload::{MAX_UPLOAD_SIZE, UploadClient, UploadError, UploadRequest};

fn request(file: std::path::PathBuf) -> UploadRequest {
    UploadRequest {
        title: "T".to_string(),
        author: "A".to_string(),
        genre: "G".to_string(),
        file,
    }
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("notes.txt");
    fs::write(&path, b"plain text").unwrap();

    let client = UploadClient::new("http://127.0.0.1:1");
    let err = client.send(&request(path)).expect_err("txt is not accepted");
    assert!(matches!(err, UploadError::UnsupportedFileType { .. }));
}

#[test]
fn oversized_file_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("huge.pdf");
    let file = fs::File::create(&path).unwrap();
    file.set_len(MAX_UPLOAD_SIZE + 1).unwrap();

    let client = UploadClient::new("http://127.0.0.1:1");
    let err = client.send(&request(path)).expect_err("over the cap");
    assert!(matches!(err, UploadError::FileTooLarge { .. }));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let client = UploadClient::new("http://127.0.0.1:1");
    let err = client
        .send(&request(dir.path().join("absent.pdf")))
        .expect_err("no such file");
    assert!(matches!(err, UploadError::FileIo { .. }));
}
