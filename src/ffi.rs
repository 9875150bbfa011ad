//! UniFFI bindings for cross-platform support (iOS, Android).
//!
//! This module provides FFI-safe types and functions for use with UniFFI.
//! Domain types are converted to simpler representations suitable for FFI,
//! and stateful types are wrapped in mutexes so foreign callers get the
//! same serialized-write behavior the Rust API enforces at compile time.

use crate::catalog::{Catalog, CatalogError, RecipeSummary};
use crate::import::{
    import_recipe as import_recipe_internal, parse_plan, parse_recipe, ImportError, RecipePlan,
};
use crate::model::{
    RangeError, Recipe, RecipeError, RecipeIngredient, RecipeNutrition, RecipeStep,
    ValidationError,
};
use crate::store::{save_recipe as save_recipe_internal, MemoryStore, StateStore, StoreError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum RecipeBoxError {
    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Value out of range: {message}")]
    Range { message: String },

    #[error("Recipe not found: {message}")]
    NotFound { message: String },

    #[error("Parse error: {message}")]
    Parse { message: String },
}

impl From<ValidationError> for RecipeBoxError {
    fn from(e: ValidationError) -> Self {
        RecipeBoxError::Validation {
            message: e.to_string(),
        }
    }
}

impl From<RangeError> for RecipeBoxError {
    fn from(e: RangeError) -> Self {
        RecipeBoxError::Range {
            message: e.to_string(),
        }
    }
}

impl From<RecipeError> for RecipeBoxError {
    fn from(e: RecipeError) -> Self {
        match e {
            RecipeError::Validation(e) => e.into(),
            RecipeError::Range(e) => e.into(),
        }
    }
}

impl From<CatalogError> for RecipeBoxError {
    fn from(e: CatalogError) -> Self {
        RecipeBoxError::NotFound {
            message: e.to_string(),
        }
    }
}

impl From<ImportError> for RecipeBoxError {
    fn from(e: ImportError) -> Self {
        match e {
            ImportError::Json(e) => RecipeBoxError::Parse {
                message: e.to_string(),
            },
            ImportError::Recipe(e) => e.into(),
        }
    }
}

impl From<StoreError> for RecipeBoxError {
    fn from(e: StoreError) -> Self {
        RecipeBoxError::Parse {
            message: e.to_string(),
        }
    }
}

/// FFI-safe representation of an ingredient line.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiIngredient {
    /// Ingredient name
    pub name: String,
    /// Free-form amount, e.g. "400g"
    pub amount: String,
}

impl From<&RecipeIngredient> for FfiIngredient {
    fn from(i: &RecipeIngredient) -> Self {
        FfiIngredient {
            name: i.name.clone(),
            amount: i.amount.clone(),
        }
    }
}

/// FFI-safe representation of a preparation step.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiStep {
    /// Instruction text
    pub text: String,
    /// Total minutes for the step
    pub total_time: i32,
    /// Active minutes within the total
    pub hands_on_time: i32,
}

impl From<&RecipeStep> for FfiStep {
    fn from(s: &RecipeStep) -> Self {
        FfiStep {
            text: s.text().to_string(),
            total_time: s.total_time(),
            hands_on_time: s.hands_on_time(),
        }
    }
}

/// FFI-safe representation of nutrition facts.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNutrition {
    /// Calories per serving
    pub calories: i32,
    /// Carbohydrates in grams
    pub carbs: i32,
    /// Fat in grams
    pub fat: i32,
    /// Protein in grams
    pub protein: i32,
}

impl From<&RecipeNutrition> for FfiNutrition {
    fn from(n: &RecipeNutrition) -> Self {
        FfiNutrition {
            calories: n.calories(),
            carbs: n.carbs(),
            fat: n.fat(),
            protein: n.protein(),
        }
    }
}

/// FFI-safe representation of a full recipe.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecipe {
    /// Stable identifier
    pub id: String,
    /// Recipe name
    pub name: String,
    /// Number of servings
    pub servings: i32,
    /// Free-form description
    pub description: String,
    /// Difficulty tier ("Low", "Medium" or "High")
    pub complexity: String,
    /// Ingredient lines
    pub ingredients: Vec<FfiIngredient>,
    /// Ordered preparation steps
    pub steps: Vec<FfiStep>,
    /// Nutrition facts
    pub nutrition: FfiNutrition,
}

impl From<&Recipe> for FfiRecipe {
    fn from(r: &Recipe) -> Self {
        FfiRecipe {
            id: r.id().to_string(),
            name: r.name().to_string(),
            servings: r.servings(),
            description: r.description().to_string(),
            complexity: r.complexity().to_string(),
            ingredients: r.ingredients().iter().map(FfiIngredient::from).collect(),
            steps: r.steps().iter().map(FfiStep::from).collect(),
            nutrition: FfiNutrition::from(r.nutrition()),
        }
    }
}

/// FFI-safe catalog listing entry.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecipeSummary {
    /// Stable identifier
    pub id: String,
    /// Recipe name
    pub name: String,
    /// Number of servings
    pub servings: i32,
    /// Difficulty tier ("Low", "Medium" or "High")
    pub complexity: String,
}

impl From<RecipeSummary> for FfiRecipeSummary {
    fn from(s: RecipeSummary) -> Self {
        FfiRecipeSummary {
            id: s.recipe_id,
            name: s.recipe_name,
            servings: s.servings,
            complexity: s.complexity.to_string(),
        }
    }
}

/// FFI-safe representation of one planned meal.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecipePlan {
    /// Title of the planned recipe
    pub recipe_title: String,
    /// Meal slot, lowercase ("breakfast", "lunch", "dinner", "snack")
    pub meal_type: String,
    /// Day of the week, lowercase
    pub meal_day: String,
}

impl From<RecipePlan> for FfiRecipePlan {
    fn from(p: RecipePlan) -> Self {
        FfiRecipePlan {
            recipe_title: p.recipe_title,
            meal_type: p.meal_type.to_string(),
            meal_day: p.meal_day.to_string(),
        }
    }
}

// A panicked holder cannot leave the plain data behind these mutexes in
// a torn state, so poisoning is safe to clear.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// FFI-safe recipe catalog.
///
/// This is the main stateful type for foreign callers; it owns a catalog
/// behind a mutex and exposes its import and lookup surface.
#[derive(Debug, Default, uniffi::Object)]
pub struct FfiCatalog {
    inner: Mutex<Catalog>,
}

#[uniffi::export]
impl FfiCatalog {
    /// Imports a generated recipe payload and adds it to the catalog.
    ///
    /// Returns the id assigned to the new recipe.
    pub fn add_generated(&self, json: String) -> Result<String, RecipeBoxError> {
        let recipe = import_recipe_internal(&json)?;
        let id = lock(&self.inner).add(recipe);
        Ok(id.to_string())
    }

    /// Returns a summary of every recipe, in insertion order.
    pub fn list(&self) -> Vec<FfiRecipeSummary> {
        lock(&self.inner)
            .list()
            .into_iter()
            .map(FfiRecipeSummary::from)
            .collect()
    }

    /// Returns the full recipe with the given id.
    pub fn get_by_id(&self, id: String) -> Result<FfiRecipe, RecipeBoxError> {
        let catalog = lock(&self.inner);
        let recipe = catalog.get_by_id(&id)?;
        Ok(FfiRecipe::from(recipe))
    }

    /// Returns the number of recipes in the catalog.
    pub fn len(&self) -> u64 {
        lock(&self.inner).len() as u64
    }

    /// Returns true when the catalog holds no recipes.
    pub fn is_empty(&self) -> bool {
        lock(&self.inner).is_empty()
    }
}

/// FFI-safe keyed JSON store for generated recipes.
#[derive(Debug, Default, uniffi::Object)]
pub struct FfiStore {
    inner: Mutex<MemoryStore>,
}

#[uniffi::export]
impl FfiStore {
    /// Parses a generated recipe payload and saves it under its
    /// title-derived key.
    ///
    /// Returns the key the recipe was stored under.
    pub fn save_recipe(&self, json: String) -> Result<String, RecipeBoxError> {
        let generated = parse_recipe(&json)?;
        let key = save_recipe_internal(&mut *lock(&self.inner), &generated)?;
        Ok(key)
    }

    /// Returns the stored JSON document for `key`, if any.
    pub fn get(&self, key: String) -> Option<String> {
        lock(&self.inner)
            .get(&key)
            .map(|value| serde_json::to_string(value).unwrap_or_default())
    }

    /// Removes `key`, reporting whether it existed.
    pub fn delete(&self, key: String) -> bool {
        lock(&self.inner).delete(&key)
    }

    /// Returns the stored keys starting with `prefix`, sorted.
    pub fn keys(&self, prefix: String) -> Vec<String> {
        lock(&self.inner).list(&prefix)
    }
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Creates an empty recipe catalog.
#[uniffi::export]
pub fn new_catalog() -> Arc<FfiCatalog> {
    Arc::new(FfiCatalog::default())
}

/// Creates an empty recipe store.
#[uniffi::export]
pub fn new_store() -> Arc<FfiStore> {
    Arc::new(FfiStore::default())
}

/// Imports a generated recipe payload into a validated recipe.
///
/// # Arguments
/// * `json` - The raw payload returned by the generator
///
/// # Returns
/// The validated recipe, or an error if parsing or validation fails.
#[uniffi::export]
pub fn import_recipe(json: String) -> Result<FfiRecipe, RecipeBoxError> {
    let recipe = import_recipe_internal(&json)?;
    Ok(FfiRecipe::from(&recipe))
}

/// Parses a generated meal-plan payload into its planned meals.
///
/// # Arguments
/// * `json` - The raw payload returned by the generator
///
/// # Returns
/// The planned meals in payload order, or an error if parsing fails.
#[uniffi::export]
pub fn parse_recipe_plan(json: String) -> Result<Vec<FfiRecipePlan>, RecipeBoxError> {
    let plan = parse_plan(&json)?;
    Ok(plan.recipe_plan.into_iter().map(FfiRecipePlan::from).collect())
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn generated_recipe_json() -> String {
        indoc! {r#"
            {
              "title": "Spaghetti Bolognese",
              "description": "A classic Italian pasta dish.",
              "complexity": "Medium",
              "dietary_preferences": "none",
              "ingredients": [
                {"name": "Spaghetti", "quantity": "400g"},
                {"name": "Ground Beef", "quantity": "250g"}
              ],
              "instructions": [
                {"step_number": 1, "description": "Boil the spaghetti."},
                {"step_number": 2, "description": "Brown the beef."}
              ],
              "number_of_servings": 4,
              "nutritional_info": {"calories": 600, "protein": 25.0, "fat": 18.0, "carbohydrates": 75.0}
            }"#}
        .to_string()
    }

    #[test]
    fn test_import_recipe() {
        let recipe = import_recipe(generated_recipe_json()).unwrap();

        assert_eq!(recipe.name, "Spaghetti Bolognese");
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.complexity, "Medium");
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.steps[0].text, "Boil the spaghetti.");
        assert_eq!(recipe.nutrition.calories, 600);
        assert!(!recipe.id.is_empty());
    }

    #[test]
    fn test_import_recipe_rejects_invalid_payload() {
        let err = import_recipe("not json".to_string()).unwrap_err();
        assert!(matches!(err, RecipeBoxError::Parse { .. }));

        let err = import_recipe(generated_recipe_json().replace("Spaghetti Bolognese", "Hi"))
            .unwrap_err();
        assert!(matches!(err, RecipeBoxError::Validation { .. }));

        let err = import_recipe(
            generated_recipe_json()
                .replace("\"number_of_servings\": 4", "\"number_of_servings\": 0"),
        )
        .unwrap_err();
        assert!(matches!(err, RecipeBoxError::Range { .. }));
    }

    #[test]
    fn test_catalog_add_list_get() {
        let catalog = new_catalog();
        assert!(catalog.is_empty());

        let id = catalog.add_generated(generated_recipe_json()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());

        let summaries = catalog.list();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].id, id);
        assert_eq!(summaries[0].name, "Spaghetti Bolognese");
        assert_eq!(summaries[0].complexity, "Medium");

        let recipe = catalog.get_by_id(id.clone()).unwrap();
        assert_eq!(recipe.id, id);
        assert_eq!(recipe.description, "A classic Italian pasta dish.");
    }

    #[test]
    fn test_catalog_get_by_id_not_found() {
        let catalog = new_catalog();

        let err = catalog.get_by_id("xyz".to_string()).unwrap_err();
        assert!(matches!(err, RecipeBoxError::NotFound { .. }));
        assert_eq!(
            err.to_string(),
            "Recipe not found: No recipe found with id \"xyz\""
        );
    }

    #[test]
    fn test_store_save_get_delete() {
        let store = new_store();

        let key = store.save_recipe(generated_recipe_json()).unwrap();
        assert_eq!(key, "recipe:spaghetti_bolognese");
        assert_eq!(store.keys("recipe:".to_string()), vec![key.clone()]);

        let stored = store.get(key.clone()).unwrap();
        assert!(stored.contains("Spaghetti Bolognese"));

        assert!(store.delete(key.clone()));
        assert!(store.get(key).is_none());
    }

    #[test]
    fn test_parse_recipe_plan() {
        let plans = parse_recipe_plan(
            indoc! {r#"
                {
                  "recipe_plan": [
                    {"recipe_title": "Overnight Oats", "meal_type": "breakfast", "meal_day": "monday"}
                  ]
                }"#}
            .to_string(),
        )
        .unwrap();

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].recipe_title, "Overnight Oats");
        assert_eq!(plans[0].meal_type, "breakfast");
        assert_eq!(plans[0].meal_day, "monday");
    }

    #[test]
    fn test_library_version() {
        let version = library_version();
        assert!(!version.is_empty());
        assert_eq!(version, env!("CARGO_PKG_VERSION"));
    }
}
