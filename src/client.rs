//! HTTP client for the RAG backend.

use std::path::Path;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::types::{ApiErrorBody, AskRequest, AskResponse, ClearResponse, UploadResponse};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Typed client for the backend's three-endpoint contract.
///
/// # Example
///
/// ```rust,no_run
/// use ragchat::RagClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = RagClient::new("http://127.0.0.1:8000", ragchat::client::DEFAULT_TIMEOUT)?;
/// let answer = client.ask("What is the refund policy?").await?;
/// println!("{}", answer.response);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RagClient {
    base_url: Url,
    http: reqwest::Client,
}

impl RagClient {
    /// Create a new client with the given request timeout.
    ///
    /// The base URL may carry a path prefix (reverse-proxy deployments pass
    /// something like `https://host/api`); endpoint URLs are joined under it.
    pub fn new(base_url: impl AsRef<str>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Self::with_client(base_url, http)
    }

    /// Create a new client with a custom reqwest client.
    pub fn with_client(base_url: impl AsRef<str>, http: reqwest::Client) -> Result<Self> {
        let mut base_url = Url::parse(base_url.as_ref())?;
        // A trailing slash keeps any proxy path prefix intact when joining.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }
        Ok(Self { base_url, http })
    }

    /// The resolved base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Upload a document for ingestion.
    ///
    /// Sends the file as multipart form field `file`, keeping its original
    /// filename — the backend keys supported formats off the extension.
    pub async fn upload(&self, path: &Path) -> Result<UploadResponse> {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("uploaded_file")
            .to_string();
        let bytes = tokio::fs::read(path).await.map_err(|source| Error::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        debug!(%filename, size = bytes.len(), "uploading document");

        let form = Form::new().part("file", Part::bytes(bytes).file_name(filename));
        let response = self
            .http
            .post(self.url("upload"))
            .multipart(form)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Submit a question to the backend.
    pub async fn ask(&self, query: impl Into<String>) -> Result<AskResponse> {
        let req = AskRequest {
            query: query.into(),
        };
        debug!(query = %req.query, "submitting question");
        let response = self
            .http
            .post(self.url("ask"))
            .json(&req)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Clear the backend's vector database.
    pub async fn clear_db(&self) -> Result<ClearResponse> {
        debug!("clearing vector database");
        let response = self.http.get(self.url("clearDB")).send().await?;
        Self::handle_response(response).await
    }

    fn url(&self, endpoint: &str) -> Url {
        self.base_url
            .join(endpoint)
            .unwrap_or_else(|_| self.base_url.clone())
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let detail = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .map(|body| body.detail);
            Err(Error::Api {
                status: status.as_u16(),
                detail,
            })
        }
    }
}
