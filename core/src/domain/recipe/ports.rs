use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::RecipeSuggestion,
        value_objects::{GenerateRecipesInput, SuggestRecipesInput},
    },
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for recipe suggestions
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    /// Ranks the built-in catalog against the detected items. Never fails:
    /// no overlap is an empty list.
    fn suggest_recipes(&self, input: SuggestRecipesInput) -> Vec<RecipeSuggestion>;

    /// Asks the LLM for recipes built around the detected items.
    fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> impl Future<Output = Result<Vec<RecipeSuggestion>, CoreError>> + Send;
}
