//! Ingredient Utilities
//!
//! Helpers for deriving the pantry row set from loaded recipes.

use std::collections::BTreeSet;

use crate::models::Recipe;

/// Deduplicated, trimmed, lexicographically sorted ingredient names
/// across all loaded recipes. Case-sensitive; blank lines dropped.
pub fn unique_ingredients(recipes: &[Recipe]) -> Vec<String> {
    let mut names = BTreeSet::new();
    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            let trimmed = ingredient.trim();
            if !trimmed.is_empty() {
                names.insert(trimmed.to_string());
            }
        }
    }
    names.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_recipe(id: u32, ingredients: &[&str]) -> Recipe {
        Recipe {
            id,
            name: format!("Recipe {}", id),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: vec![],
            average_rating: 0.0,
        }
    }

    #[test]
    fn test_dedup_trim_sort() {
        let recipes = vec![
            make_recipe(1, &["wild rice", "  berries ", ""]),
            make_recipe(2, &["berries", "corn"]),
        ];
        assert_eq!(
            unique_ingredients(&recipes),
            vec!["berries", "corn", "wild rice"]
        );
    }

    #[test]
    fn test_case_sensitive() {
        let recipes = vec![make_recipe(1, &["Corn", "corn"])];
        assert_eq!(unique_ingredients(&recipes), vec!["Corn", "corn"]);
    }

    #[test]
    fn test_empty_recipe_list() {
        assert!(unique_ingredients(&[]).is_empty());
    }
}
