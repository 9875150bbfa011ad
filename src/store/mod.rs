//! Keyed JSON storage for generated recipes.
//!
//! Documents are JSON values stored under string keys. Generated
//! recipes go in under a key derived from their title, so a later
//! lookup only needs the title to find them again.

use crate::import::GeneratedRecipe;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;
use tracing::info;

/// Errors that can occur when saving into a state store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The recipe could not be serialized into a storable JSON value.
    #[error("Failed to serialize recipe for storage: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Keyed JSON document storage.
///
/// The only implementation here is in-memory; the trait is the seam a
/// persistent backend plugs into.
pub trait StateStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<&Value>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: String, value: Value);

    /// Removes `key`, reporting whether it existed.
    fn delete(&mut self, key: &str) -> bool;

    /// Returns the keys starting with `prefix`, sorted.
    fn list(&self, prefix: &str) -> Vec<String>;
}

/// In-memory [`StateStore`] over a hash map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Value>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    fn set(&mut self, key: String, value: Value) {
        self.entries.insert(key, value);
    }

    fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    fn list(&self, prefix: &str) -> Vec<String> {
        let mut keys: Vec<String> = self
            .entries
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect();
        // Map order is arbitrary; keep listings stable.
        keys.sort();
        keys
    }
}

/// Storage key for a recipe title: `recipe:` plus the lowercased title
/// with spaces as underscores.
pub fn recipe_key(title: &str) -> String {
    format!("recipe:{}", title.to_lowercase().replace(' ', "_"))
}

/// Saves a generated recipe under its title-derived key.
///
/// # Arguments
///
/// * `store` - The store to write into
/// * `recipe` - The generated recipe to save
///
/// # Returns
///
/// The key the recipe was stored under.
///
/// # Errors
///
/// Returns [`StoreError::Serialize`] if the recipe cannot be turned
/// into a JSON value.
///
/// # Examples
///
/// ```
/// use recipe_box::{parse_recipe, save_recipe, MemoryStore, StateStore};
///
/// let generated = parse_recipe(r#"{
///     "title": "Overnight Oats",
///     "description": "Oats soaked while you sleep.",
///     "complexity": "Easy",
///     "dietary_preferences": "vegetarian",
///     "ingredients": [{"name": "Rolled Oats", "quantity": "80g"}],
///     "instructions": [{"step_number": 1, "description": "Mix oats and milk, then chill overnight."}],
///     "number_of_servings": 1,
///     "nutritional_info": {"calories": 350, "protein": 13.0, "fat": 7.5, "carbohydrates": 55.0}
/// }"#)?;
///
/// let mut store = MemoryStore::new();
/// let key = save_recipe(&mut store, &generated)?;
/// assert_eq!(key, "recipe:overnight_oats");
/// assert!(store.get(&key).is_some());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn save_recipe<S: StateStore>(
    store: &mut S,
    recipe: &GeneratedRecipe,
) -> Result<String, StoreError> {
    let key = recipe_key(&recipe.title);
    let value = serde_json::to_value(recipe)?;
    store.set(key.clone(), value);
    info!(key = %key, "saved generated recipe");
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::parse_recipe;
    use indoc::indoc;
    use serde_json::json;

    fn create_test_generated() -> GeneratedRecipe {
        parse_recipe(indoc! {r#"
            {
              "title": "Spaghetti Bolognese",
              "description": "A classic Italian pasta dish.",
              "complexity": "Medium",
              "dietary_preferences": "none",
              "ingredients": [{"name": "Spaghetti", "quantity": "400g"}],
              "instructions": [{"step_number": 1, "description": "Boil the spaghetti."}],
              "number_of_servings": 4,
              "nutritional_info": {"calories": 600, "protein": 25.0, "fat": 18.0, "carbohydrates": 75.0}
            }"#})
        .unwrap()
    }

    #[test]
    fn test_recipe_key_derivation() {
        assert_eq!(
            recipe_key("Spaghetti Bolognese"),
            "recipe:spaghetti_bolognese"
        );
        assert_eq!(recipe_key("Oats"), "recipe:oats");
    }

    #[test]
    fn test_set_and_get() {
        let mut store = MemoryStore::new();
        store.set("recipe:oats".to_string(), json!({"title": "Oats"}));

        assert_eq!(store.get("recipe:oats").unwrap()["title"], "Oats");
        assert!(store.get("recipe:missing").is_none());
    }

    #[test]
    fn test_set_replaces_existing_value() {
        let mut store = MemoryStore::new();
        store.set("recipe:oats".to_string(), json!({"version": 1}));
        store.set("recipe:oats".to_string(), json!({"version": 2}));

        assert_eq!(store.get("recipe:oats").unwrap()["version"], 2);
        assert_eq!(store.list("").len(), 1);
    }

    #[test]
    fn test_delete_reports_prior_existence() {
        let mut store = MemoryStore::new();
        store.set("recipe:oats".to_string(), json!({}));

        assert!(store.delete("recipe:oats"));
        assert!(!store.delete("recipe:oats"));
        assert!(store.get("recipe:oats").is_none());
    }

    #[test]
    fn test_list_filters_by_prefix_sorted() {
        let mut store = MemoryStore::new();
        store.set("recipe:waffles".to_string(), json!({}));
        store.set("recipe:oats".to_string(), json!({}));
        store.set("plan:week_1".to_string(), json!({}));

        assert_eq!(store.list("recipe:"), ["recipe:oats", "recipe:waffles"]);
        assert_eq!(
            store.list(""),
            ["plan:week_1", "recipe:oats", "recipe:waffles"]
        );
        assert!(store.list("settings:").is_empty());
    }

    #[test]
    fn test_save_recipe_key_and_value() {
        let generated = create_test_generated();
        let mut store = MemoryStore::new();

        let key = save_recipe(&mut store, &generated).unwrap();
        assert_eq!(key, "recipe:spaghetti_bolognese");

        // The stored value deserializes back to the generated shape.
        let stored: GeneratedRecipe =
            serde_json::from_value(store.get(&key).unwrap().clone()).unwrap();
        assert_eq!(stored, generated);
    }

    #[test]
    fn test_save_recipe_overwrites_same_title() {
        let generated = create_test_generated();
        let mut store = MemoryStore::new();

        save_recipe(&mut store, &generated).unwrap();
        let mut updated = generated.clone();
        updated.number_of_servings = 6;
        let key = save_recipe(&mut store, &updated).unwrap();

        let stored: GeneratedRecipe =
            serde_json::from_value(store.get(&key).unwrap().clone()).unwrap();
        assert_eq!(stored.number_of_servings, 6);
        assert_eq!(store.list("recipe:").len(), 1);
    }
}
