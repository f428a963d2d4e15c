//! Chat session orchestration.
//!
//! [`ChatSession`] mediates between user actions and the backend's three
//! endpoints and records every outcome in the transcript. It holds no
//! business logic: document ingestion, retrieval and answer generation all
//! happen server-side.
//!
//! Operations take `&mut self`, so a single-tasked front end cannot have two
//! invocations of the same action in flight at once — the terminal analogue
//! of disabling a button for the duration of its request.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::client::RagClient;
use crate::error::Error;
use crate::transcript::{Sender, Transcript, format_answer};

/// Document extensions the backend accepts.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "txt", "docx"];

/// Asks the user to approve a destructive action.
///
/// The binary wires this to a terminal prompt; tests stub it.
pub trait Confirmer {
    /// Returns `true` if the user approved.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Approves everything without asking.
#[derive(Debug, Default)]
pub struct AlwaysConfirm;

impl Confirmer for AlwaysConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// One interactive chat session against a RAG backend.
#[derive(Debug)]
pub struct ChatSession {
    client: RagClient,
    transcript: Transcript,
    selected_file: Option<PathBuf>,
}

impl ChatSession {
    /// Create a session with an empty transcript and no document selected.
    pub fn new(client: RagClient) -> Self {
        Self {
            client,
            transcript: Transcript::new(),
            selected_file: None,
        }
    }

    /// The conversation so far.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The currently selected document, if any.
    pub fn selected_file(&self) -> Option<&Path> {
        self.selected_file.as_deref()
    }

    /// Whether an upload may proceed. True iff a file is selected.
    pub fn upload_ready(&self) -> bool {
        self.selected_file.is_some()
    }

    /// Update the current document selection.
    ///
    /// `None` clears the selection. A path with an extension the backend
    /// will not accept is rejected locally — the error lands in the
    /// transcript and no request is issued.
    pub fn select_file(&mut self, path: Option<PathBuf>) {
        let Some(path) = path else {
            self.selected_file = None;
            return;
        };

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);
        match extension.as_deref() {
            Some(ext) if SUPPORTED_EXTENSIONS.contains(&ext) => {
                debug!(file = %path.display(), "document selected");
                self.selected_file = Some(path);
            }
            other => {
                let err = Error::UnsupportedFile {
                    extension: other.map_or_else(|| "(none)".to_string(), |ext| format!(".{ext}")),
                };
                self.transcript.push_error(Sender::System, err.to_string());
                self.selected_file = None;
            }
        }
    }

    /// Upload the selected document to the backend.
    ///
    /// With no selection this reports a local error and issues no request.
    /// The selection is reset on every exit path — success, API error or
    /// transport failure — matching a file picker that clears after submit.
    pub async fn upload_document(&mut self) {
        let Some(path) = self.selected_file.take() else {
            self.transcript
                .push_error(Sender::System, Error::NoFileSelected.to_string());
            return;
        };

        info!(file = %path.display(), "uploading document");
        match self.client.upload(&path).await {
            Ok(response) => {
                self.transcript.push(Sender::System, response.message);
            }
            Err(err) => {
                warn!(error = %err, "upload failed");
                self.transcript
                    .push_error(Sender::System, format!("Upload failed: {err}"));
            }
        }
    }

    /// Submit a question to the backend.
    ///
    /// The query is trimmed; an empty result is a strict no-op (no entry, no
    /// request). Otherwise the question is echoed as a user entry before the
    /// request goes out, and the reply or failure is appended afterwards.
    pub async fn ask_question(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        self.transcript.push(Sender::User, query);
        match self.client.ask(query).await {
            Ok(response) => {
                self.transcript
                    .push(Sender::Api, format_answer(&response.response, &response.sources));
            }
            Err(err) => {
                warn!(error = %err, "ask failed");
                self.transcript.push_error(
                    Sender::System,
                    format!("Request failed: {err}. Did you upload a document?"),
                );
            }
        }
    }

    /// Clear the backend's vector database.
    ///
    /// Destructive, so the user must confirm first; declining is a no-op.
    pub async fn clear_database(&mut self, confirmer: &mut dyn Confirmer) {
        if !confirmer.confirm(
            "Are you sure you want to clear the vector database? This cannot be undone.",
        ) {
            debug!("clear database declined");
            return;
        }

        info!("clearing vector database");
        match self.client.clear_db().await {
            Ok(response) => {
                self.transcript.push(Sender::System, response.message);
            }
            Err(err) => {
                warn!(error = %err, "clear database failed");
                self.transcript
                    .push_error(Sender::System, format!("Clear DB failed: {err}"));
            }
        }
    }
}
