use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    generate_ai_recipes::{__path_generate_ai_recipes, generate_ai_recipes},
    suggest_recipes::{__path_suggest_recipes, suggest_recipes},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(suggest_recipes, generate_ai_recipes))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/suggest-recipes/", state.args.server.root_path),
            post(suggest_recipes),
        )
        .route(
            &format!("{}/ai-recipes/", state.args.server.root_path),
            post(generate_ai_recipes),
        )
}
