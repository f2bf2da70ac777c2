use serde::Deserialize;
use tracing::{instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    feedback::ports::FeedbackRepository,
    recipe::{
        entities::{Recipe, RecipeSuggestion, normalize_ingredient_name},
        helpers::{annotate_recipes, detected_names, retain_complete, unique_names},
        ports::{LLMClient, RecipeService},
        schema::{get_recipe_generation_schema, render_recipe_prompt},
        value_objects::{GenerateRecipesInput, SuggestRecipesInput},
    },
    recognition::ports::FoodRecognitionClient,
};

#[derive(Debug, Deserialize)]
struct GeneratedRecipes {
    recipes: Vec<Recipe>,
}

impl<RC, LLM, FB> RecipeService for Service<RC, LLM, FB>
where
    RC: FoodRecognitionClient,
    LLM: LLMClient,
    FB: FeedbackRepository,
{
    #[instrument(skip_all, fields(items = input.items.len()))]
    fn suggest_recipes(&self, input: SuggestRecipesInput) -> Vec<RecipeSuggestion> {
        let mut suggestions = self
            .catalog
            .match_ingredients(input.items.iter().map(|item| item.name.as_str()));

        if input.only_complete {
            retain_complete(&mut suggestions);
        }

        suggestions
    }

    #[instrument(skip_all, fields(items = input.items.len()))]
    async fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> Result<Vec<RecipeSuggestion>, CoreError> {
        let ingredients = unique_names(&input.items);
        if ingredients.is_empty() {
            return Err(CoreError::NoIngredients);
        }

        let prompt = render_recipe_prompt(&ingredients, self.max_recipes);
        let raw_response = self
            .llm_client
            .generate_with_text(prompt, get_recipe_generation_schema())
            .await?;

        let generated: GeneratedRecipes = serde_json::from_str(&raw_response).map_err(|e| {
            tracing::error!("Failed to parse LLM response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        let recipes: Vec<Recipe> = generated
            .recipes
            .into_iter()
            .filter_map(normalize_generated_recipe)
            .collect();

        let mut suggestions = annotate_recipes(&recipes, &detected_names(&ingredients));

        if input.only_complete {
            retain_complete(&mut suggestions);
        }

        Ok(suggestions)
    }
}

fn normalize_generated_recipe(recipe: Recipe) -> Option<Recipe> {
    let name = recipe.name.trim();
    if name.is_empty() {
        warn!("Dropping generated recipe without a name");
        return None;
    }

    Some(Recipe {
        name: name.to_string(),
        ingredients: recipe
            .ingredients
            .iter()
            .filter_map(|i| normalize_ingredient_name(i))
            .collect(),
        steps: recipe
            .steps
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
    })
}
