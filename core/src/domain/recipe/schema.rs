use serde_json::json;

const RECIPE_PROMPT_TEMPLATE: &str = "You are a practical home cook. \
Suggest up to {max_recipes} simple, realistic recipes that mainly use these ingredients: {ingredients}. \
You may add a few common pantry staples; they will show up on the user's shopping list. \
List every ingredient as a short lowercase name without quantities (for example \"egg\", not \"2 eggs\"). \
Write the steps as short imperative sentences.";

/// Renders the recipe generation prompt for the given ingredient names.
pub fn render_recipe_prompt(ingredients: &[String], max_recipes: u32) -> String {
    RECIPE_PROMPT_TEMPLATE
        .replace("{max_recipes}", &max_recipes.to_string())
        .replace("{ingredients}", &ingredients.join(", "))
}

/// Returns the JSON schema for recipe generation LLM responses
pub fn get_recipe_generation_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "recipes": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "ingredients": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "steps": {
                            "type": "array",
                            "items": { "type": "string" }
                        }
                    },
                    "required": ["name", "ingredients", "steps"]
                }
            }
        },
        "required": ["recipes"]
    })
}
