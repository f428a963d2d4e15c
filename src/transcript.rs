//! Append-only conversation transcript.
//!
//! Every user action and backend response becomes an [`Entry`]. Entries are
//! ordered, never mutated and never removed; the transcript lives for one
//! process run (no persistence).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The person typing questions.
    User,
    /// Client-side status and error reporting.
    System,
    /// The RAG backend's answers.
    Api,
}

impl Sender {
    /// Display label for this sender.
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::System => "System",
            Self::Api => "RAG Engine",
        }
    }
}

/// A single transcript entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Who produced it.
    pub sender: Sender,
    /// Rendered message text.
    pub text: String,
    /// Whether this entry reports a failure.
    pub is_error: bool,
    /// When it was appended.
    pub at: DateTime<Utc>,
}

/// Ordered, append-only message log.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a normal entry.
    pub fn push(&mut self, sender: Sender, text: impl Into<String>) {
        self.append(sender, text.into(), false);
    }

    /// Append an error entry.
    pub fn push_error(&mut self, sender: Sender, text: impl Into<String>) {
        self.append(sender, text.into(), true);
    }

    fn append(&mut self, sender: Sender, text: String, is_error: bool) {
        self.entries.push(Entry {
            sender,
            text,
            is_error,
            at: Utc::now(),
        });
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The most recent entry, if any.
    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the transcript is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Render a successful answer exactly as the chat log shows it:
/// `Answer: <response>`, a blank line, then `Sources:` with one source per
/// line.
pub fn format_answer(response: &str, sources: &[String]) -> String {
    format!("Answer: {response}\n\nSources:\n{}", sources.join("\n"))
}
