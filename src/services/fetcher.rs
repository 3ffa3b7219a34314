//! Image acquisition for the detection relay.
//!
//! Resolves an `imageUrl` into raw bytes. Network URLs are downloaded with a
//! binary GET; `data:` URIs (produced by the browser client from local file
//! uploads) are decoded in-process without touching the network.

use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, StatusCode};
use thiserror::Error;

/// Errors that can occur while obtaining image bytes.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// The image server answered with a non-success status.
    #[error("image server returned status {0}")]
    Status(StatusCode),
    /// The `data:` URI was missing its payload separator.
    #[error("malformed data URI")]
    DataUri,
    /// The `data:` URI payload was not valid base64.
    #[error("invalid base64 in data URI: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Fetches the raw bytes of an image from a URL or embedded data URI.
///
/// The shared `client` carries the fetch timeout, set once at startup.
/// No retries are attempted; any failure is terminal for the request.
///
/// # Errors
/// Returns [`FetchError`] on transport failure, a non-2xx response, or a
/// malformed data URI.
pub async fn fetch_image(client: &Client, image_url: &str) -> Result<Vec<u8>, FetchError> {
    if image_url.starts_with("data:") {
        return decode_data_uri(image_url);
    }

    let resp = client.get(image_url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        tracing::error!(status = %status, "Error fetching image");
        return Err(FetchError::Status(status));
    }

    let bytes = resp.bytes().await?;
    tracing::info!(size = bytes.len(), "Image fetched successfully");
    Ok(bytes.to_vec())
}

/// Decodes an RFC 2397 data URI into raw bytes.
///
/// Base64 payloads (the only kind the browser client emits) are decoded; a
/// payload without the `;base64` marker is taken as literal bytes.
fn decode_data_uri(uri: &str) -> Result<Vec<u8>, FetchError> {
    let (header, payload) = uri.split_once(',').ok_or(FetchError::DataUri)?;
    if header.ends_with(";base64") {
        Ok(STANDARD.decode(payload)?)
    } else {
        Ok(payload.as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_base64_data_uri() {
        // "hello" in base64
        let uri = "data:image/png;base64,aGVsbG8=";
        assert_eq!(decode_data_uri(uri).unwrap(), b"hello");
    }

    #[test]
    fn rejects_data_uri_without_payload() {
        assert!(matches!(
            decode_data_uri("data:image/png;base64"),
            Err(FetchError::DataUri)
        ));
    }

    #[test]
    fn rejects_invalid_base64_payload() {
        assert!(matches!(
            decode_data_uri("data:image/png;base64,!!!!"),
            Err(FetchError::Base64(_))
        ));
    }

    #[test]
    fn passes_through_plain_text_payload() {
        assert_eq!(decode_data_uri("data:text/plain,abc").unwrap(), b"abc");
    }
}
