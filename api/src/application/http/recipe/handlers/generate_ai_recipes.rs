use axum::extract::State;
use kitchenwise_core::domain::recipe::{ports::RecipeService, value_objects::GenerateRecipesInput};

use crate::application::http::{
    recipe::validators::{IngredientListRequest, SuggestionsResponse},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/ai-recipes/",
    tag = "recipes",
    summary = "Generate recipes with the LLM",
    description = "Asks the language model for simple recipes built around the ingredients and annotates each with what is at hand and what is missing.",
    request_body = IngredientListRequest,
    responses(
        (status = 200, body = SuggestionsResponse),
        (status = 400, description = "Empty or invalid ingredient list", body = ApiErrorResponse),
        (status = 503, description = "Recipe generation service unavailable", body = ApiErrorResponse)
    ),
)]
pub async fn generate_ai_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<IngredientListRequest>,
) -> Result<Response<SuggestionsResponse>, ApiError> {
    let only_complete = payload.only_complete;
    let items = payload.into_detected_items()?;

    let suggestions = state
        .service
        .generate_recipes(GenerateRecipesInput {
            items,
            only_complete,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SuggestionsResponse { suggestions }))
}
