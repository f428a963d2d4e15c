//! API DTOs mirroring the backend's JSON bodies.
//!
//! The backend is treated as an opaque collaborator; these types cover the
//! three-endpoint contract (`/upload`, `/ask`, `/clearDB`) and the shared
//! `{detail}` failure body.

use serde::{Deserialize, Serialize};

/// Request body for `POST /ask`.
#[derive(Debug, Clone, Serialize)]
pub struct AskRequest {
    /// The user's question, already trimmed.
    pub query: String,
}

/// Success body for `POST /ask`.
#[derive(Debug, Clone, Deserialize)]
pub struct AskResponse {
    /// Generated answer text.
    pub response: String,
    /// Source citations, in retrieval order.
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Success body for `POST /upload`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    /// Human-readable ingestion summary.
    pub message: String,
}

/// Success body for `GET /clearDB`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClearResponse {
    /// Human-readable confirmation.
    pub message: String,
}

/// Failure body shared by all three endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Server-supplied error description.
    pub detail: String,
}
