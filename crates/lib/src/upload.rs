//! Client half of the external upload boundary.
//!
//! The server side (multipart handling, storage offload, rate limiting) is an
//! external collaborator; this module only speaks its wire contract:
//! `POST {base}/api/upload` with multipart fields `bookFile`, `title`,
//! `author`, `genre`, answering `{success, book}` or `{success:false,
//! error}`. The MIME whitelist and size cap are checked client-side before
//! any bytes leave the machine, mirroring the server's own limits.

use std::fs;
use std::path::{Path, PathBuf};

use reqwest::blocking::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// MIME types the upload endpoint accepts.
pub const ALLOWED_MIME: &[&str] = &["application/pdf", "image/jpeg", "image/png"];

/// Maximum accepted file size in bytes (10 MiB).
pub const MAX_UPLOAD_SIZE: u64 = 10 * 1024 * 1024;

/// Errors from the upload boundary.
#[derive(Error, Debug)]
pub enum UploadError {
    /// File extension maps to no accepted MIME type
    #[error("Unsupported file type: {path} (accepted: PDF, JPEG, PNG)")]
    UnsupportedFileType { path: String },

    /// File larger than the boundary accepts
    #[error("File too large: {size} bytes (maximum {max})")]
    FileTooLarge { size: u64, max: u64 },

    /// Reading the file from disk failed
    #[error("Failed to read upload file: {source}")]
    FileIo {
        #[from]
        source: std::io::Error,
    },

    /// Transport-level HTTP failure
    #[error("Upload request failed: {source}")]
    Request {
        #[from]
        source: reqwest::Error,
    },

    /// The server answered `success: false`
    #[error("Upload rejected: {reason}")]
    Rejected { reason: String },
}

impl From<UploadError> for crate::Error {
    fn from(err: UploadError) -> Self {
        crate::Error::Upload(err)
    }
}

/// Metadata and file handed off to the boundary.
#[derive(Clone, Debug)]
pub struct UploadRequest {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub file: PathBuf,
}

/// The book record the server reports back on success.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadedBook {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub uploaded_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// Response envelope for the upload endpoint.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    success: bool,
    #[serde(default)]
    book: Option<UploadedBook>,
    #[serde(default)]
    error: Option<String>,
}

/// Blocking HTTP client for the upload endpoint.
#[derive(Debug)]
pub struct UploadClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl UploadClient {
    /// Create a client against `base_url` (scheme + host + port, no path).
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Validate and send one upload, returning the server's book record.
    pub fn send(&self, request: &UploadRequest) -> Result<UploadedBook, UploadError> {
        let mime = mime_for_path(&request.file).ok_or_else(|| UploadError::UnsupportedFileType {
            path: request.file.display().to_string(),
        })?;

        let size = fs::metadata(&request.file)?.len();
        if size > MAX_UPLOAD_SIZE {
            return Err(UploadError::FileTooLarge {
                size,
                max: MAX_UPLOAD_SIZE,
            });
        }

        let file_name = request
            .file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "book".to_string());
        let bytes = fs::read(&request.file)?;
        let form = Form::new()
            .part(
                "bookFile",
                Part::bytes(bytes).file_name(file_name).mime_str(mime)?,
            )
            .text("title", request.title.clone())
            .text("author", request.author.clone())
            .text("genre", request.genre.clone());

        tracing::debug!(file = %request.file.display(), size, mime, "Sending upload");
        let response: UploadResponse = self
            .http
            .post(format!("{}/api/upload", self.base_url))
            .multipart(form)
            .send()?
            .json()?;

        match response {
            UploadResponse {
                success: true,
                book: Some(book),
                ..
            } => Ok(book),
            UploadResponse { error, .. } => Err(UploadError::Rejected {
                reason: error.unwrap_or_else(|| "unknown server error".to_string()),
            }),
        }
    }
}

/// Extension-derived MIME type, restricted to the boundary's whitelist.
fn mime_for_path(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "pdf" => Some("application/pdf"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        _ => None,
    }
}
