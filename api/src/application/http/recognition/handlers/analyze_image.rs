use axum::{
    extract::{Multipart, State, multipart::MultipartError},
    http::StatusCode,
};
use kitchenwise_core::domain::recognition::{
    ports::RecognitionService, value_objects::AnalyzeImageInput,
};
use tracing::error;

use crate::application::http::{
    recognition::validators::{AnalyzeImageForm, AnalyzeImageResponse},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[utoipa::path(
    post,
    path = "/analyze-image/",
    tag = "recognition",
    summary = "Detect food items on an image",
    description = "Sends the uploaded image to the food recognition service and returns the detected ingredients, most confident first.",
    request_body(content = AnalyzeImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = AnalyzeImageResponse),
        (status = 400, description = "Missing, empty or unsupported image", body = ApiErrorResponse),
        (status = 413, description = "Image too large", body = ApiErrorResponse),
        (status = 503, description = "Recognition service unavailable", body = ApiErrorResponse)
    ),
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeImageResponse>, ApiError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field
            .content_type()
            .map(|c| c.to_string())
            .unwrap_or_default();

        let data = field.bytes().await.map_err(multipart_error)?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::PayloadTooLarge(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        upload = Some((content_type, data.to_vec()));
    }

    let (content_type, image_data) =
        upload.ok_or_else(|| ApiError::BadRequest("Missing 'file' field".to_string()))?;

    let items = state
        .service
        .analyze_image(AnalyzeImageInput {
            image_data,
            content_type,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeImageResponse { items }))
}

fn multipart_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::PayloadTooLarge(format!(
            "Image too large. Max size is {} bytes",
            MAX_IMAGE_SIZE
        ));
    }

    error!("Failed to read multipart body: {}", e);
    ApiError::BadRequest(format!("Failed to read multipart body: {}", e))
}
