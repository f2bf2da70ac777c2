use tracing::{debug, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    feedback::ports::FeedbackRepository,
    recipe::{entities::DetectedItem, ports::LLMClient},
    recognition::{
        entities::{ImageContentType, RecognizedConcept},
        ports::{FoodRecognitionClient, RecognitionService},
        value_objects::AnalyzeImageInput,
    },
};

impl<RC, LLM, FB> RecognitionService for Service<RC, LLM, FB>
where
    RC: FoodRecognitionClient,
    LLM: LLMClient,
    FB: FeedbackRepository,
{
    #[instrument(skip_all, fields(content_type = %input.content_type, size = input.image_data.len()))]
    async fn analyze_image(&self, input: AnalyzeImageInput) -> Result<Vec<DetectedItem>, CoreError> {
        let content_type: ImageContentType = input.content_type.parse()?;

        if input.image_data.is_empty() {
            return Err(CoreError::Invalid);
        }

        let concepts = self
            .recognition_client
            .recognize(input.image_data, content_type)
            .await?;

        let total = concepts.len();
        let items = filter_concepts(concepts, self.confidence_threshold);
        debug!(total, kept = items.len(), "Recognition finished");

        Ok(items)
    }
}

/// Keeps concepts at or above `threshold` as detected items, sorted by score
/// descending. Scores are clamped into `[0, 1]`.
pub fn filter_concepts(concepts: Vec<RecognizedConcept>, threshold: f64) -> Vec<DetectedItem> {
    let mut items: Vec<DetectedItem> = concepts
        .into_iter()
        .filter(|concept| concept.value.is_finite() && concept.value >= threshold)
        .filter_map(|concept| DetectedItem::new(&concept.name, concept.value.clamp(0.0, 1.0)).ok())
        .collect();

    items.sort_by(|a, b| b.score.total_cmp(&a.score));

    items
}
