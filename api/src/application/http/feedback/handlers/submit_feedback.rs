use axum::extract::State;
use kitchenwise_core::domain::feedback::{entities::FeedbackReceipt, ports::FeedbackService};

use crate::application::http::{
    feedback::validators::SubmitFeedbackRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/feedback/",
    tag = "feedback",
    summary = "Rate a recipe suggestion",
    description = "Accepts a thumbs up or down for a suggested recipe. Feedback is logged, not stored.",
    request_body = SubmitFeedbackRequest,
    responses(
        (status = 202, body = FeedbackReceipt),
        (status = 400, description = "Invalid feedback", body = ApiErrorResponse)
    ),
)]
pub async fn submit_feedback(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SubmitFeedbackRequest>,
) -> Result<Response<FeedbackReceipt>, ApiError> {
    let receipt = state
        .service
        .submit_feedback(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Accepted(receipt))
}
