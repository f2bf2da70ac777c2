use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// A thumbs up or down on a suggested recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeFeedback {
    pub recipe_name: String,
    pub liked: bool,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub have: Vec<String>,
    #[serde(default)]
    pub missing: Vec<String>,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FeedbackEntry {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub feedback: RecipeFeedback,
}

impl FeedbackEntry {
    pub fn new(feedback: RecipeFeedback) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            received_at: now,
            feedback,
        }
    }

    pub fn receipt(&self) -> FeedbackReceipt {
        FeedbackReceipt {
            id: self.id,
            received_at: self.received_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FeedbackReceipt {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_ids_are_time_ordered() {
        let feedback = RecipeFeedback {
            recipe_name: "Garlic Bread".to_string(),
            liked: true,
            ingredients: vec![],
            have: vec![],
            missing: vec![],
            source: None,
        };

        let first = FeedbackEntry::new(feedback.clone());
        let receipt = first.receipt();

        assert_eq!(first.id.get_version_num(), 7);
        assert_eq!(receipt.id, first.id);
        assert_eq!(receipt.received_at, first.received_at);

        let second = FeedbackEntry::new(feedback);
        assert_ne!(first.id, second.id);
    }
}
