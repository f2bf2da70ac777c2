use kitchenwise_core::domain::recipe::{
    entities::{DetectedItem, RecipeSuggestion},
    helpers::parse_manual_ingredients,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::application::http::server::api_entities::api_error::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct DetectedItemRequest {
    #[validate(
        length(max = 100, message = "name must be at most 100 characters"),
        custom(function = "validate_ingredient_name")
    )]
    #[schema(example = "tomato")]
    pub name: String,
    #[validate(range(min = 0.0, max = 1.0, message = "score must be between 0 and 1"))]
    #[schema(example = 0.87)]
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct IngredientListRequest {
    #[validate(nested)]
    pub items: Vec<DetectedItemRequest>,
    /// Comma separated ingredients typed in by the user
    #[serde(default)]
    #[validate(length(max = 1000, message = "extra_ingredients must be at most 1000 characters"))]
    #[schema(example = "soy sauce, ketchup")]
    pub extra_ingredients: Option<String>,
    /// Drop suggestions that still miss an ingredient
    #[serde(default)]
    pub only_complete: bool,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<RecipeSuggestion>,
}

fn validate_ingredient_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut error = ValidationError::new("blank_name");
        error.message = Some("name must not be blank".into());
        return Err(error);
    }
    Ok(())
}

impl IngredientListRequest {
    /// Detected items followed by the manual extras (score 1.0).
    pub fn into_detected_items(self) -> Result<Vec<DetectedItem>, ApiError> {
        let mut items = self
            .items
            .into_iter()
            .map(|item| DetectedItem::new(&item.name, item.score))
            .collect::<Result<Vec<_>, _>>()
            .map_err(ApiError::from)?;

        if let Some(extra) = self.extra_ingredients.as_deref() {
            items.extend(parse_manual_ingredients(extra));
        }

        Ok(items)
    }
}
