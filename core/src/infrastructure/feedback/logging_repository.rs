use tracing::info;

use crate::domain::{
    common::entities::app_errors::CoreError,
    feedback::{entities::FeedbackEntry, ports::FeedbackRepository},
};

/// Writes feedback to the log stream; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct LoggingFeedbackRepository;

impl LoggingFeedbackRepository {
    pub fn new() -> Self {
        Self
    }
}

impl FeedbackRepository for LoggingFeedbackRepository {
    async fn record_feedback(&self, entry: FeedbackEntry) -> Result<(), CoreError> {
        let feedback = &entry.feedback;

        info!(
            feedback_id = %entry.id,
            received_at = %entry.received_at,
            recipe_name = %feedback.recipe_name,
            liked = feedback.liked,
            ingredients = ?feedback.ingredients,
            have = ?feedback.have,
            missing = ?feedback.missing,
            source = feedback.source.as_deref().unwrap_or("unknown"),
            "Recipe feedback received"
        );

        Ok(())
    }
}
