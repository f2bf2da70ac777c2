pub mod generate_ai_recipes;
pub mod suggest_recipes;
