use crate::domain::recipe::{
    entities::{Recipe, RecipeSuggestion},
    helpers::{detected_names, match_recipes},
};

/// The immutable set of recipes the matcher ranks against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// The four built-in demo recipes.
    pub fn reference() -> Self {
        Self::new(vec![
            Recipe::new(
                "Tomato Mozzarella Sandwich",
                &["bread", "cheese", "tomato", "lettuce"],
                &[
                    "Slice the bread and toast it if you like.",
                    "Wash the tomato and lettuce and slice them.",
                    "Lay the cheese on the bread and top with tomato and lettuce.",
                    "Season with salt, pepper and a little oil or butter.",
                ],
            ),
            Recipe::new(
                "Simple Cheese Omelette",
                &["egg", "cheese", "butter"],
                &[
                    "Whisk the eggs in a bowl.",
                    "Heat the butter in a pan.",
                    "Pour in the eggs and let them set.",
                    "Add the cheese, fold over and fry briefly.",
                ],
            ),
            Recipe::new(
                "Garlic Bread",
                &["bread", "butter", "garlic"],
                &[
                    "Preheat the oven.",
                    "Mix the butter with the garlic.",
                    "Spread the mixture on the bread.",
                    "Bake until golden brown.",
                ],
            ),
            Recipe::new(
                "Shrimp Pasta",
                &["shrimp", "garlic", "butter", "pasta", "cheese"],
                &[
                    "Cook the pasta al dente in salted water.",
                    "Heat butter and garlic in a pan.",
                    "Sear the shrimp briefly.",
                    "Add the pasta, sprinkle with cheese and serve.",
                ],
            ),
        ])
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Ranks the catalog against the given ingredient names.
    pub fn match_ingredients<I, S>(&self, detected: I) -> Vec<RecipeSuggestion>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match_recipes(&self.recipes, &detected_names(detected))
    }
}

impl Default for RecipeCatalog {
    fn default() -> Self {
        Self::reference()
    }
}
