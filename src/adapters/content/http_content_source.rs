//! HTTP Content Source Adapter
//!
//! Fetches the content document with a single GET against a base URL.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::domain::content::ContentDocument;
use crate::ports::{ContentLoadError, ContentSource, CONTENT_PATH};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Loads the content document from `{base_url}/assets/content.json`.
#[derive(Debug, Clone)]
pub struct HttpContentSource {
    base_url: String,
    client: Client,
}

impl HttpContentSource {
    /// Creates a source for the given site root.
    ///
    /// # Errors
    ///
    /// Returns `ContentLoadError::Network` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ContentLoadError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ContentLoadError::Network(e.to_string()))?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Builds the document URL.
    pub fn content_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), CONTENT_PATH)
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn load(&self) -> Result<ContentDocument, ContentLoadError> {
        let url = self.content_url();
        tracing::debug!("Fetching content from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ContentLoadError::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ContentLoadError::NotFound(url));
        }
        if !status.is_success() {
            return Err(ContentLoadError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ContentLoadError::Network(e.to_string()))?;
        Ok(serde_json::from_str(&body)?)
    }

    fn describe(&self) -> String {
        self.content_url()
    }
}
