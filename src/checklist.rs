//! Per-Recipe Ingredient Check-Off
//!
//! In-memory only, reset on reload. Keyed by recipe id rather than
//! list position so a re-search cannot leak checked indices into a
//! different recipe.

use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientChecklist {
    checked: HashMap<u32, HashSet<usize>>,
}

impl IngredientChecklist {
    pub fn is_checked(&self, recipe_id: u32, index: usize) -> bool {
        self.checked
            .get(&recipe_id)
            .map(|set| set.contains(&index))
            .unwrap_or(false)
    }

    pub fn toggle(&mut self, recipe_id: u32, index: usize) {
        let set = self.checked.entry(recipe_id).or_default();
        if !set.insert(index) {
            set.remove(&index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_marks_and_unmarks() {
        let mut list = IngredientChecklist::default();
        assert!(!list.is_checked(7, 0));
        list.toggle(7, 0);
        assert!(list.is_checked(7, 0));
        list.toggle(7, 0);
        assert!(!list.is_checked(7, 0));
    }

    #[test]
    fn test_keyed_by_recipe_identity() {
        let mut list = IngredientChecklist::default();
        list.toggle(1, 2);
        // Same index under another recipe stays unchecked.
        assert!(!list.is_checked(2, 2));
        assert!(list.is_checked(1, 2));
    }
}
