use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = HealthResponse)
    ),
)]
pub async fn get_health() -> Response<HealthResponse> {
    Response::OK(HealthResponse {
        status: "ok".to_string(),
    })
}
