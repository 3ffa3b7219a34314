//! Image detection relay endpoint.
//!
//! This module provides the handler that orchestrates one classification
//! request: validate input, fetch the image, forward the bytes to the
//! external model service, and relay its answer.
//!
//! All logging uses structured tracing with key fields for observability.

use actix_web::{HttpResponse, Responder, web};
use tracing::{error, info};

use crate::{AppState, models::DetectRequest, services};

/// Generic outward message for any fetch or classification failure.
/// Internal detail is logged but never leaked to the client.
const PROCESS_ERROR: &str = "Failed to process image";

/// Runs image classification on a user-supplied image through the external
/// model service.
///
/// # HTTP Method
/// `POST /api/detect`
///
/// # Request Body (JSON)
/// ```json
/// {
///   "imageUrl": "https://example.com/photo.png",
///   "model": "microsoft/resnet-50"
/// }
/// ```
/// `imageUrl` may also be a base64 `data:` URI produced by the browser client
/// from a local file upload; those are decoded in-process without a network
/// fetch.
///
/// # Validation Rules
/// - `model`: required, must be non-empty after trimming. Checked before any
///   network call is made.
///
/// # Success Response (200 OK)
/// The model service's answer is relayed verbatim under `result`:
/// ```json
/// {
///   "result": [
///     { "label": "tabby, tabby cat", "score": 0.94 },
///     { "label": "Egyptian cat", "score": 0.03 }
///   ]
/// }
/// ```
/// The value is an opaque passthrough; its shape depends entirely on the
/// selected model and is not validated or transformed here.
///
/// # Error Responses
/// - `400 Bad Request`: `{ "error": "Model ID is required" }` when `model`
///   is missing or empty.
/// - `500 Internal Server Error`: `{ "error": "Failed to process image" }`
///   for any fetch or model-service failure. The specific cause is logged
///   internally.
///
/// # Side Effects
/// One image download (unless the image is an embedded data URI) followed by
/// one classification call. No retries, no state outlives the request.
#[tracing::instrument(skip(app_state, payload))]
pub async fn post_detect(
    app_state: web::Data<AppState>,
    payload: web::Json<DetectRequest>,
) -> impl Responder {
    let DetectRequest { image_url, model } = payload.into_inner();

    // Ensure a model is provided before any network call
    if model.trim().is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Model ID is required"
        }));
    }

    info!(model = %model, "Processing detection request");

    let image = match services::fetch_image(&app_state.http, &image_url).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!(model = %model, error = %e, "Failed to fetch image");
            return HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": PROCESS_ERROR }));
        }
    };

    match app_state
        .classifier
        .image_classification(&model, image)
        .await
    {
        Ok(result) => {
            info!(model = %model, "Image classification succeeded");
            HttpResponse::Ok().json(serde_json::json!({ "result": result }))
        }
        Err(e) => {
            error!(model = %model, error = %e, "Image classification failed");
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": PROCESS_ERROR }))
        }
    }
}
