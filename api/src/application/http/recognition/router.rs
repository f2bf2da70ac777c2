use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

use super::handlers::analyze_image::{MAX_IMAGE_SIZE, __path_analyze_image, analyze_image};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(analyze_image))]
pub struct RecognitionApiDoc;

pub fn recognition_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/analyze-image/", state.args.server.root_path),
            post(analyze_image),
        )
        // Room for the multipart envelope around a maximum size image
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 64 * 1024))
}
