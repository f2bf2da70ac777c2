use std::collections::{BTreeSet, HashSet};

use crate::domain::recipe::entities::{
    DetectedItem, Recipe, RecipeSuggestion, normalize_ingredient_name,
};

/// Collapses a sequence of names into a lowercased set.
pub fn detected_names<I, S>(names: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter_map(|name| normalize_ingredient_name(name.as_ref()))
        .collect()
}

/// Annotates every recipe against `detected`, drops the ones with no overlap
/// and ranks the rest by number of available ingredients.
///
/// The sort is stable, so recipes with the same count keep catalog order.
pub fn match_recipes(recipes: &[Recipe], detected: &BTreeSet<String>) -> Vec<RecipeSuggestion> {
    let mut suggestions: Vec<RecipeSuggestion> = recipes
        .iter()
        .map(|recipe| RecipeSuggestion::from_recipe(recipe, detected))
        .filter(|suggestion| !suggestion.have.is_empty())
        .collect();

    suggestions.sort_by(|a, b| b.have.len().cmp(&a.have.len()));

    suggestions
}

/// Annotates recipes without filtering or reordering them.
pub fn annotate_recipes(recipes: &[Recipe], detected: &BTreeSet<String>) -> Vec<RecipeSuggestion> {
    recipes
        .iter()
        .map(|recipe| RecipeSuggestion::from_recipe(recipe, detected))
        .collect()
}

/// Parses a comma separated list typed by the user, e.g. `"soy sauce, ketchup"`.
pub fn parse_manual_ingredients(raw: &str) -> Vec<DetectedItem> {
    raw.split(',')
        .filter_map(|part| DetectedItem::manual(part).ok())
        .collect()
}

/// Ingredient names in first-seen order, without duplicates.
pub fn unique_names(items: &[DetectedItem]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(item.name.as_str()))
        .map(|item| item.name.clone())
        .collect()
}

pub fn retain_complete(suggestions: &mut Vec<RecipeSuggestion>) {
    suggestions.retain(RecipeSuggestion::is_complete);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::catalog::RecipeCatalog;

    fn names(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn assert_partition(suggestion: &RecipeSuggestion) {
        let have: BTreeSet<&String> = suggestion.have.iter().collect();
        let missing: BTreeSet<&String> = suggestion.missing.iter().collect();
        let ingredients: BTreeSet<&String> = suggestion.ingredients.iter().collect();

        assert!(have.is_disjoint(&missing), "{} overlaps", suggestion.name);
        assert_eq!(
            have.union(&missing).cloned().collect::<BTreeSet<_>>(),
            ingredients,
            "{} does not cover its ingredients",
            suggestion.name
        );
        assert!(!have.is_empty());
    }

    #[test]
    fn test_bread_and_cheese() {
        let catalog = RecipeCatalog::reference();
        let suggestions = catalog.match_ingredients(["bread", "cheese"]);

        assert_eq!(suggestions[0].name, "Tomato Mozzarella Sandwich");
        assert_eq!(suggestions[0].have, vec!["bread", "cheese"]);
        assert_eq!(suggestions[0].missing, vec!["lettuce", "tomato"]);
        assert_eq!(suggestions[0].total, 4);

        let garlic_bread = suggestions
            .iter()
            .find(|s| s.name == "Garlic Bread")
            .unwrap();
        assert_eq!(garlic_bread.have, vec!["bread"]);
        assert_eq!(garlic_bread.missing, vec!["butter", "garlic"]);
        assert_eq!(garlic_bread.total, 3);

        let order: Vec<&str> = suggestions.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "Tomato Mozzarella Sandwich",
                "Simple Cheese Omelette",
                "Garlic Bread",
                "Shrimp Pasta",
            ]
        );

        suggestions.iter().for_each(assert_partition);
    }

    #[test]
    fn test_unknown_ingredient_matches_nothing() {
        let catalog = RecipeCatalog::reference();
        assert!(catalog.match_ingredients(["durian"]).is_empty());
    }

    #[test]
    fn test_empty_input_matches_nothing() {
        let catalog = RecipeCatalog::reference();
        assert!(catalog.match_ingredients(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_superset_returns_every_recipe_complete() {
        let catalog = RecipeCatalog::reference();
        let detected = [
            "egg", "cheese", "butter", "bread", "garlic", "tomato", "lettuce", "shrimp", "pasta",
        ];

        let suggestions = catalog.match_ingredients(detected);

        let order: Vec<(&str, usize)> = suggestions
            .iter()
            .map(|s| (s.name.as_str(), s.total))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Shrimp Pasta", 5),
                ("Tomato Mozzarella Sandwich", 4),
                ("Simple Cheese Omelette", 3),
                ("Garlic Bread", 3),
            ]
        );
        assert!(suggestions.iter().all(RecipeSuggestion::is_complete));
        suggestions.iter().for_each(assert_partition);
    }

    #[test]
    fn test_duplicates_and_case_collapse() {
        let catalog = RecipeCatalog::reference();
        let once = catalog.match_ingredients(["garlic"]);
        let repeated = catalog.match_ingredients(["garlic", "Garlic", " GARLIC "]);

        assert_eq!(once, repeated);
        assert_eq!(once.len(), 2);
    }

    #[test]
    fn test_matching_is_idempotent() {
        let catalog = RecipeCatalog::reference();
        let detected = names(&["butter", "egg", "pasta"]);

        assert_eq!(
            match_recipes(catalog.recipes(), &detected),
            match_recipes(catalog.recipes(), &detected)
        );
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let recipes = vec![
            Recipe::new("B", &["salt", "flour"], &[]),
            Recipe::new("A", &["salt", "sugar"], &[]),
            Recipe::new("C", &["salt", "sugar", "flour"], &[]),
        ];

        let suggestions = match_recipes(&recipes, &names(&["salt"]));
        let order: Vec<&str> = suggestions.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(order, vec!["B", "A", "C"]);

        let suggestions = match_recipes(&recipes, &names(&["salt", "sugar"]));
        let order: Vec<&str> = suggestions.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(order, vec!["A", "C", "B"]);
    }

    #[test]
    fn test_partition_holds_for_every_subset() {
        let catalog = RecipeCatalog::reference();
        let pool = ["egg", "cheese", "butter", "bread", "garlic", "durian"];

        for mask in 0u32..(1 << pool.len()) {
            let detected: BTreeSet<String> = pool
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, name)| name.to_string())
                .collect();

            let suggestions = match_recipes(catalog.recipes(), &detected);
            suggestions.iter().for_each(assert_partition);
            assert!(
                suggestions
                    .windows(2)
                    .all(|pair| pair[0].have.len() >= pair[1].have.len())
            );
        }
    }

    #[test]
    fn test_annotate_keeps_everything() {
        let recipes = vec![
            Recipe::new("Toast", &["bread"], &[]),
            Recipe::new("Fruit Salad", &["apple", "banana"], &[]),
        ];

        let annotated = annotate_recipes(&recipes, &names(&["apple"]));

        assert_eq!(annotated.len(), 2);
        assert_eq!(annotated[0].name, "Toast");
        assert!(annotated[0].have.is_empty());
        assert_eq!(annotated[1].have, vec!["apple"]);
    }

    #[test]
    fn test_parse_manual_ingredients() {
        let items = parse_manual_ingredients(" Soy Sauce, ketchup ,, ,Orange Juice");
        let parsed: Vec<(&str, f64)> = items.iter().map(|i| (i.name.as_str(), i.score)).collect();

        assert_eq!(
            parsed,
            vec![
                ("soy sauce", 1.0),
                ("ketchup", 1.0),
                ("orange juice", 1.0)
            ]
        );
        assert!(parse_manual_ingredients("  ").is_empty());
    }

    #[test]
    fn test_unique_names_keeps_first_occurrence() {
        let items = vec![
            DetectedItem::new("egg", 0.9).unwrap(),
            DetectedItem::new("milk", 0.5).unwrap(),
            DetectedItem::manual("egg").unwrap(),
        ];

        assert_eq!(unique_names(&items), vec!["egg", "milk"]);
    }

    #[test]
    fn test_retain_complete() {
        let catalog = RecipeCatalog::reference();
        let mut suggestions = catalog.match_ingredients(["bread", "butter", "garlic", "egg"]);

        retain_complete(&mut suggestions);

        let order: Vec<&str> = suggestions.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(order, vec!["Garlic Bread"]);
    }
}
