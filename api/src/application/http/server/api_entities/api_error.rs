use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use kitchenwise_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "E_BAD_REQUEST",
            ApiError::PayloadTooLarge(_) => "E_PAYLOAD_TOO_LARGE",
            ApiError::ServiceUnavailable(_) => "E_SERVICE_UNAVAILABLE",
            ApiError::InternalServerError(_) => "E_INTERNAL_SERVER_ERROR",
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Invalid
            | CoreError::InvalidIngredientName(_)
            | CoreError::InvalidScore(_)
            | CoreError::UnsupportedContentType(_)
            | CoreError::NoIngredients => ApiError::BadRequest(error.to_string()),
            CoreError::MissingCredentials(ref name) => {
                tracing::warn!("Upstream service not configured: {}", error);
                ApiError::ServiceUnavailable(format!(
                    "Service unavailable: {} is not configured",
                    name
                ))
            }
            CoreError::ExternalServiceError(_) => {
                tracing::warn!("Upstream service unavailable: {}", error);
                ApiError::ServiceUnavailable(
                    "Service unavailable: upstream request failed".to_string(),
                )
            }
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ApiErrorResponse {
            code: self.code().to_string(),
            status: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON extractor that runs `validator` rules before reaching the handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(format!("Validation error: {}", e)))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        assert_eq!(
            ApiError::from(CoreError::InvalidScore(2.0)).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(CoreError::NoIngredients).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(CoreError::MissingCredentials("CLARIFAI_PAT".to_string()))
                .status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::from(CoreError::ExternalServiceError("timeout".to_string())).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::from(CoreError::InternalServerError).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_gateway_detail_is_not_echoed() {
        let error = ApiError::from(CoreError::ExternalServiceError(
            "request failed for https://gateway.example/?key=secret".to_string(),
        ));

        assert_eq!(error.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(!error.to_string().contains("secret"));
        assert_eq!(
            error.to_string(),
            "Service unavailable: upstream request failed"
        );

        let error = ApiError::from(CoreError::MissingCredentials("GEMINI_API_KEY".to_string()));
        assert_eq!(
            error.to_string(),
            "Service unavailable: GEMINI_API_KEY is not configured"
        );
    }
}
