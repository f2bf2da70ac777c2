use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    feedback::{
        entities::{FeedbackEntry, FeedbackReceipt, RecipeFeedback},
        ports::{FeedbackRepository, FeedbackService},
    },
    recipe::ports::LLMClient,
    recognition::ports::FoodRecognitionClient,
};

impl<RC, LLM, FB> FeedbackService for Service<RC, LLM, FB>
where
    RC: FoodRecognitionClient,
    LLM: LLMClient,
    FB: FeedbackRepository,
{
    #[instrument(skip_all, fields(recipe_name = %feedback.recipe_name, liked = feedback.liked))]
    async fn submit_feedback(&self, feedback: RecipeFeedback) -> Result<FeedbackReceipt, CoreError> {
        let recipe_name = feedback.recipe_name.trim().to_string();
        if recipe_name.is_empty() {
            return Err(CoreError::Invalid);
        }

        let feedback = RecipeFeedback {
            recipe_name,
            ..feedback
        };

        let entry = FeedbackEntry::new(feedback);
        let receipt = entry.receipt();

        self.feedback_repository.record_feedback(entry).await?;

        Ok(receipt)
    }
}
