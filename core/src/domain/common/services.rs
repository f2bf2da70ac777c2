use std::sync::Arc;

use crate::domain::{
    feedback::ports::FeedbackRepository, recipe::catalog::RecipeCatalog,
    recipe::ports::LLMClient, recognition::ports::FoodRecognitionClient,
};

/// Application service shared by every handler.
///
/// Generic over the gateway ports so tests can plug in mocks; the catalog is
/// injected once and only ever read.
pub struct Service<RC, LLM, FB>
where
    RC: FoodRecognitionClient,
    LLM: LLMClient,
    FB: FeedbackRepository,
{
    pub(crate) recognition_client: Arc<RC>,
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) feedback_repository: Arc<FB>,
    pub(crate) catalog: Arc<RecipeCatalog>,
    pub(crate) confidence_threshold: f64,
    pub(crate) max_recipes: u32,
}

impl<RC, LLM, FB> Clone for Service<RC, LLM, FB>
where
    RC: FoodRecognitionClient,
    LLM: LLMClient,
    FB: FeedbackRepository,
{
    fn clone(&self) -> Self {
        Self {
            recognition_client: Arc::clone(&self.recognition_client),
            llm_client: Arc::clone(&self.llm_client),
            feedback_repository: Arc::clone(&self.feedback_repository),
            catalog: Arc::clone(&self.catalog),
            confidence_threshold: self.confidence_threshold,
            max_recipes: self.max_recipes,
        }
    }
}

impl<RC, LLM, FB> Service<RC, LLM, FB>
where
    RC: FoodRecognitionClient,
    LLM: LLMClient,
    FB: FeedbackRepository,
{
    pub fn new(
        recognition_client: RC,
        llm_client: LLM,
        feedback_repository: FB,
        catalog: RecipeCatalog,
        confidence_threshold: f64,
        max_recipes: u32,
    ) -> Self {
        Self {
            recognition_client: Arc::new(recognition_client),
            llm_client: Arc::new(llm_client),
            feedback_repository: Arc::new(feedback_repository),
            catalog: Arc::new(catalog),
            confidence_threshold,
            max_recipes,
        }
    }
}
