use kitchenwise_core::domain::feedback::entities::RecipeFeedback;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SubmitFeedbackRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "recipe_name must be between 1 and 200 characters"
    ))]
    #[schema(example = "Garlic Bread")]
    pub recipe_name: String,
    pub liked: bool,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub have: Vec<String>,
    #[serde(default)]
    pub missing: Vec<String>,
    #[serde(default)]
    #[validate(length(max = 100))]
    #[schema(example = "streamlit_v1")]
    pub source: Option<String>,
}

impl From<SubmitFeedbackRequest> for RecipeFeedback {
    fn from(request: SubmitFeedbackRequest) -> Self {
        Self {
            recipe_name: request.recipe_name,
            liked: request.liked,
            ingredients: request.ingredients,
            have: request.have,
            missing: request.missing,
            source: request.source,
        }
    }
}
