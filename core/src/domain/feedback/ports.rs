use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    feedback::entities::{FeedbackEntry, FeedbackReceipt, RecipeFeedback},
};

/// Where accepted feedback ends up
#[cfg_attr(test, mockall::automock)]
pub trait FeedbackRepository: Send + Sync {
    fn record_feedback(
        &self,
        entry: FeedbackEntry,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait FeedbackService: Send + Sync {
    fn submit_feedback(
        &self,
        feedback: RecipeFeedback,
    ) -> impl Future<Output = Result<FeedbackReceipt, CoreError>> + Send;
}
