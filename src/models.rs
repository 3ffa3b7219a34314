//! Data models for detection requests and shared application state.
//!
//! This module defines the request/response structs for the relay API and the
//! process-wide `AppState` handle injected into every handler.

use std::{env, sync::Arc, time::Duration};

use serde::{Deserialize, Serialize};

use crate::services::HfClient;

/// Upper bound on one image download. The classification call carries its own
/// timeout inside [`HfClient`].
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Body of `POST /api/detect`.
///
/// Both fields default to the empty string when absent so that a request
/// without a `model` is rejected by the handler's own validation (HTTP 400
/// with a specific message) instead of a serde deserialization error.
///
/// # Example
/// ```json
/// {
///   "imageUrl": "https://example.com/photo.png",
///   "model": "microsoft/resnet-50"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectRequest {
    /// Image location: an HTTP(S) URL or a base64 `data:` URI produced by the
    /// browser client from a local file.
    #[serde(default)]
    pub image_url: String,
    /// Hugging Face model identifier (e.g. `microsoft/resnet-50`).
    /// Must be non-empty after trimming.
    #[serde(default)]
    pub model: String,
}

/// Shared application state for all handlers.
///
/// Holds the HTTP client used for image downloads and the classification API
/// client. Both are constructed once at startup and reused across requests;
/// neither carries per-request mutable state, so the handle is safe to share
/// without locking.
#[derive(Clone)]
pub struct AppState {
    /// HTTP client for fetching images, configured with a 30-second timeout
    pub http: reqwest::Client,
    /// Hugging Face Inference API client
    pub classifier: Arc<HfClient>,
}

impl AppState {
    /// Creates the application state from environment configuration.
    ///
    /// # Environment Variables
    ///
    /// - `HUGGINGFACE_API_KEY`: bearer credential for the inference API.
    ///   Absence is not an error here; classification calls will fail
    ///   upstream instead.
    /// - `HF_API_BASE`: inference API base URL, defaults to the hosted
    ///   Hugging Face endpoint. Overridden in tests to point at a mock.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP clients cannot be built.
    pub fn new() -> anyhow::Result<Self> {
        let api_key = env::var("HUGGINGFACE_API_KEY").unwrap_or_default();
        let base_url = env::var("HF_API_BASE")
            .unwrap_or_else(|_| "https://api-inference.huggingface.co".to_string());

        let http = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;

        Ok(Self {
            http,
            classifier: Arc::new(HfClient::new(api_key, base_url)?),
        })
    }
}
