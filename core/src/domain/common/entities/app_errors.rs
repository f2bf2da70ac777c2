use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("Invalid input")]
    Invalid,

    #[error("Invalid ingredient name: {0:?}")]
    InvalidIngredientName(String),

    #[error("Invalid score {0}: must be a finite number between 0 and 1")]
    InvalidScore(f64),

    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("No ingredients provided")]
    NoIngredients,

    #[error("Missing credentials for {0}")]
    MissingCredentials(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}

