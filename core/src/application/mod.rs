use crate::{
    domain::{
        common::{KitchenwiseConfig, entities::app_errors::CoreError, services::Service},
        recipe::catalog::RecipeCatalog,
    },
    infrastructure::{
        feedback::LoggingFeedbackRepository, llm::GeminiLLMClient,
        recognition::ClarifaiRecognitionClient,
    },
};

pub type KitchenwiseService =
    Service<ClarifaiRecognitionClient, GeminiLLMClient, LoggingFeedbackRepository>;

/// Wires the production adapters around the reference catalog.
pub fn create_service(config: KitchenwiseConfig) -> Result<KitchenwiseService, CoreError> {
    create_service_with_catalog(config, RecipeCatalog::reference())
}

pub fn create_service_with_catalog(
    config: KitchenwiseConfig,
    catalog: RecipeCatalog,
) -> Result<KitchenwiseService, CoreError> {
    if config.recognition.clarifai_pat.is_none() {
        tracing::warn!("CLARIFAI_PAT is not set, image analysis will be unavailable");
    }
    if config.llm.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set, recipe generation will be unavailable");
    }

    let confidence_threshold = config.recognition.confidence_threshold;
    let max_recipes = config.llm.max_recipes;

    let recognition_client =
        ClarifaiRecognitionClient::new(config.recognition, config.http_timeout)?;
    let llm_client = GeminiLLMClient::new(&config.llm, config.http_timeout)?;

    Ok(Service::new(
        recognition_client,
        llm_client,
        LoggingFeedbackRepository::new(),
        catalog,
        confidence_threshold,
        max_recipes,
    ))
}
