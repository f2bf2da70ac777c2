use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::submit_feedback::{__path_submit_feedback, submit_feedback};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(submit_feedback))]
pub struct FeedbackApiDoc;

pub fn feedback_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/feedback/", state.args.server.root_path),
        post(submit_feedback),
    )
}
