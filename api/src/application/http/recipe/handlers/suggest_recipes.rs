use axum::extract::State;
use kitchenwise_core::domain::recipe::{ports::RecipeService, value_objects::SuggestRecipesInput};

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
    path = "/suggest-recipes/",
    tag = "recipes",
    summary = "Match detected ingredients against the built-in recipes",
    description = "Returns every built-in recipe sharing at least one ingredient with the request, ranked by the number of ingredients at hand. No match is an empty list.",
    request_body = IngredientListRequest,
    responses(
        (status = 200, body = SuggestionsResponse),
        (status = 400, description = "Invalid ingredient list", body = ApiErrorResponse)
    ),
)]
pub async fn suggest_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<IngredientListRequest>,
) -> Result<Response<SuggestionsResponse>, ApiError> {
    let only_complete = payload.only_complete;
    let items = payload.into_detected_items()?;

    let suggestions = state.service.suggest_recipes(SuggestRecipesInput {
        items,
        only_complete,
    });

    Ok(Response::OK(SuggestionsResponse { suggestions }))
}
