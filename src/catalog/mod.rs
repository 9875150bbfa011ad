use crate::model::{Recipe, RecipeId};
use thiserror::Error;
use tracing::debug;

mod model;
pub use model::RecipeSummary;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("No recipe found with id {0:?}")]
    NotFound(String),
}

/// In-memory collection of recipes exposed for lookup.
///
/// Lookup is a linear scan over the insertion-ordered list; catalogs are
/// expected to stay small. The `&mut self` mutation surface means writes
/// are serialized by construction in a single-threaded context.
///
/// # Examples
///
/// ```
/// use recipe_box::{Catalog, Recipe};
///
/// let mut catalog = Catalog::new();
/// let id = catalog.add(Recipe::new("Spaghetti Bolognese", 4)?);
/// assert_eq!(catalog.get_by_id(id.as_str())?.name(), "Spaghetti Bolognese");
/// assert!(catalog.get_by_id("missing").is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Adds a recipe and returns its id.
    pub fn add(&mut self, recipe: Recipe) -> RecipeId {
        let id = recipe.id().clone();
        debug!(id = %id, name = %recipe.name(), "added recipe to catalog");
        self.recipes.push(recipe);
        id
    }

    /// Returns a summary of every recipe in insertion order.
    pub fn list(&self) -> Vec<RecipeSummary> {
        self.recipes.iter().map(RecipeSummary::from).collect()
    }

    /// Looks up a recipe by its id string.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` when no recipe matches.
    pub fn get_by_id(&self, id: &str) -> Result<&Recipe, CatalogError> {
        self.recipes
            .iter()
            .find(|recipe| recipe.id().as_str() == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Returns the number of cataloged recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Returns true when the catalog holds no recipes.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Iterates over the recipes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Complexity, RecipeIngredient, RecipeNutrition, RecipeStep};

    fn create_test_catalog() -> Catalog {
        let recipe = Recipe::builder("Spaghetti Bolognese")
            .id("abc")
            .servings(4)
            .description("A classic Italian pasta dish.")
            .nutrition(RecipeNutrition::new(600, 75, 0, 0).unwrap())
            .ingredient(RecipeIngredient::new("Spaghetti", "400g"))
            .ingredient(RecipeIngredient::new("Ground Beef", "250g"))
            .ingredient(RecipeIngredient::new("Tomato Sauce", "1 cup"))
            .step(
                RecipeStep::with_times(
                    "Boil the spaghetti according to package instructions.",
                    10,
                    2,
                )
                .unwrap(),
            )
            .step(RecipeStep::with_times("Cook the ground beef until browned.", 15, 5).unwrap())
            .build()
            .unwrap();

        let mut catalog = Catalog::new();
        catalog.add(recipe);
        catalog
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.list().is_empty());
    }

    #[test]
    fn test_get_by_id_found() {
        let catalog = create_test_catalog();
        let recipe = catalog.get_by_id("abc").unwrap();
        assert_eq!(recipe.name(), "Spaghetti Bolognese");
        assert_eq!(recipe.servings(), 4);
    }

    #[test]
    fn test_get_by_id_not_found() {
        let catalog = create_test_catalog();
        let err = catalog.get_by_id("xyz").unwrap_err();
        assert_eq!(err, CatalogError::NotFound("xyz".to_string()));
    }

    #[test]
    fn test_add_returns_id() {
        let mut catalog = Catalog::new();
        let id = catalog.add(Recipe::new("Pancakes", 2).unwrap());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get_by_id(id.as_str()).unwrap().name(), "Pancakes");
    }

    #[test]
    fn test_list_summaries() {
        let mut catalog = create_test_catalog();
        catalog.add(
            Recipe::builder("Pancakes")
                .id("def")
                .servings(2)
                .complexity(Complexity::Low)
                .build()
                .unwrap(),
        );

        let summaries = catalog.list();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].recipe_id, "abc");
        assert_eq!(summaries[0].recipe_name, "Spaghetti Bolognese");
        assert_eq!(summaries[0].servings, 4);
        assert_eq!(summaries[1].recipe_id, "def");
        assert_eq!(summaries[1].complexity, Complexity::Low);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut catalog = Catalog::new();
        for name in ["Pancakes", "Waffles", "Crepes"] {
            catalog.add(Recipe::new(name, 1).unwrap());
        }
        let names: Vec<_> = catalog.list().into_iter().map(|s| s.recipe_name).collect();
        assert_eq!(names, ["Pancakes", "Waffles", "Crepes"]);
    }

    #[test]
    fn test_iter() {
        let catalog = create_test_catalog();
        let total_steps: usize = catalog.iter().map(|r| r.steps().len()).sum();
        assert_eq!(total_steps, 2);
    }

    #[test]
    fn test_summary_wire_names() {
        let catalog = create_test_catalog();
        let value = serde_json::to_value(catalog.list()).unwrap();
        assert_eq!(value[0]["recipeId"], "abc");
        assert_eq!(value[0]["recipeName"], "Spaghetti Bolognese");
        assert_eq!(value[0]["servings"], 4);
        assert_eq!(value[0]["recipeComplexity"], "Medium");
    }
}
