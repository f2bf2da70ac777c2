use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, ingredients: &[&str], steps: &[&str]) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            steps: steps.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Distinct ingredient names of this recipe.
    pub fn ingredient_set(&self) -> BTreeSet<&str> {
        self.ingredients.iter().map(String::as_str).collect()
    }
}

/// An ingredient name with the confidence it was detected with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetectedItem {
    #[schema(example = "tomato")]
    pub name: String,
    #[schema(example = 0.92, minimum = 0.0, maximum = 1.0)]
    pub score: f64,
}

impl DetectedItem {
    pub const MANUAL_SCORE: f64 = 1.0;

    /// Builds a detected item, normalizing the name and rejecting scores
    /// outside `[0, 1]`.
    pub fn new(name: &str, score: f64) -> Result<Self, CoreError> {
        let name = normalize_ingredient_name(name)
            .ok_or_else(|| CoreError::InvalidIngredientName(name.to_string()))?;

        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(CoreError::InvalidScore(score));
        }

        Ok(Self { name, score })
    }

    /// An ingredient typed in by the user.
    pub fn manual(name: &str) -> Result<Self, CoreError> {
        Self::new(name, Self::MANUAL_SCORE)
    }
}

/// Lowercases and trims an ingredient name, `None` if nothing is left.
pub fn normalize_ingredient_name(name: &str) -> Option<String> {
    let normalized = name.trim().to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// A recipe annotated with which of its ingredients are at hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeSuggestion {
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub have: Vec<String>,
    pub missing: Vec<String>,
    pub total: usize,
}

impl RecipeSuggestion {
    pub fn from_recipe(recipe: &Recipe, detected: &BTreeSet<String>) -> Self {
        let (have, missing): (Vec<&str>, Vec<&str>) = recipe
            .ingredient_set()
            .into_iter()
            .partition(|ingredient| detected.contains(*ingredient));

        Self {
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.clone(),
            steps: recipe.steps.clone(),
            total: have.len() + missing.len(),
            have: have.into_iter().map(str::to_string).collect(),
            missing: missing.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}
