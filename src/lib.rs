//! Chat client for a RAG document-QA backend.
//!
//! The backend is an opaque HTTP collaborator exposing three endpoints:
//! multipart `POST /upload`, JSON `POST /ask` and `GET /clearDB`. This crate
//! provides a typed client plus the session layer a front end needs — an
//! append-only transcript, local validation, and the error-to-text mapping
//! rules for every failure mode.
//!
//! # Example
//!
//! ```rust,no_run
//! use ragchat::{ChatSession, RagClient};
//! use ragchat::client::DEFAULT_TIMEOUT;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RagClient::new("http://127.0.0.1:8000", DEFAULT_TIMEOUT)?;
//!     let mut session = ChatSession::new(client);
//!
//!     session.select_file(Some("report.pdf".into()));
//!     session.upload_document().await;
//!     session.ask_question("What is the refund policy?").await;
//!
//!     for entry in session.transcript().entries() {
//!         println!("{}: {}", entry.sender.label(), entry.text);
//!     }
//!     Ok(())
//! }
//! ```

pub mod chat;
pub mod client;
pub mod config;
pub mod error;
pub mod transcript;
pub mod types;
pub mod ui;

// Re-exports
pub use chat::{ChatSession, Confirmer};
pub use client::RagClient;
pub use error::{Error, Result};
pub use transcript::{Entry, Sender, Transcript};
