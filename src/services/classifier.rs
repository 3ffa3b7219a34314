//! Hugging Face Inference API client.
//!
//! Provides the async client and error types for communicating with the
//! external image-classification model service. The response payload is
//! treated as an opaque JSON value and relayed to the caller unmodified.

use std::time::Duration;

use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use thiserror::Error;

/// Upper bound on one classification call.
const CLASSIFY_TIMEOUT: Duration = Duration::from_secs(60);

/// Errors that can occur when communicating with the classification service.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// HTTP error from reqwest.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// The model service answered with a non-success status.
    #[error("model service returned status {status}: {body}")]
    Api {
        /// Upstream HTTP status
        status: StatusCode,
        /// Upstream error body, kept for logs only
        body: String,
    },
}

/// Client handle for the Hugging Face Inference API.
///
/// Constructed once at process start and shared read-only across requests.
/// An absent credential is not rejected here; classification calls simply
/// fail upstream with an authorization error.
pub struct HfClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl HfClient {
    /// Creates a client for the given credential and API base URL.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(api_key: String, base_url: String) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(CLASSIFY_TIMEOUT).build()?;
        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Runs image classification on raw image bytes.
    ///
    /// Posts the bytes to `{base_url}/models/{model}` with the bearer
    /// credential. The response body is returned as an opaque
    /// [`serde_json::Value`] without schema validation, so fields the relay
    /// does not interpret are never dropped.
    ///
    /// # Errors
    /// Returns [`ClassifyError`] if the request fails, the service answers
    /// with a non-2xx status, or the body is not valid JSON.
    pub async fn image_classification(
        &self,
        model: &str,
        data: Vec<u8>,
    ) -> Result<serde_json::Value, ClassifyError> {
        let url = format!("{}/models/{}", self.base_url, model);
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(data)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(model = %model, status = %status, body = %body, "Model service error");
            return Err(ClassifyError::Api { status, body });
        }

        Ok(resp.json::<serde_json::Value>().await?)
    }
}
