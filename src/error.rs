//! Error types for the client library.

use thiserror::Error;

/// Client error type.
///
/// Three families, mirroring how failures reach the user: local validation
/// (no request is ever issued), API-level rejections (non-2xx with an
/// optional `detail` body), and transport or decode failures.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed in transit (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid base or endpoint URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend rejected the request. Displays the server-supplied `detail`
    /// when present, otherwise the bare status code.
    #[error("{}", api_message(.status, .detail))]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the `detail` field of the response body.
        detail: Option<String>,
    },

    /// Upload requested with no document selected.
    #[error("Please select a file to upload.")]
    NoFileSelected,

    /// Selected document has an extension the backend will not accept.
    #[error("Unsupported file type '{extension}'. Supported types are: .pdf, .txt, .docx")]
    UnsupportedFile {
        /// The offending extension, including the leading dot.
        extension: String,
    },

    /// Selected document could not be read from disk.
    #[error("Failed to read '{path}': {source}")]
    FileRead {
        /// Path as given by the user.
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn api_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => detail.clone(),
        None => format!("HTTP Error: {status}"),
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;
