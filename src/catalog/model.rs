use crate::model::{Complexity, Recipe};
use serde::{Deserialize, Serialize};

/// The identifying fields of a cataloged recipe, as returned by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Id of the summarized recipe
    #[serde(rename = "recipeId")]
    pub recipe_id: String,
    /// Recipe name
    #[serde(rename = "recipeName")]
    pub recipe_name: String,
    /// Number of servings
    pub servings: i32,
    /// Complexity tier
    #[serde(rename = "recipeComplexity")]
    pub complexity: Complexity,
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        RecipeSummary {
            recipe_id: recipe.id().to_string(),
            recipe_name: recipe.name().to_string(),
            servings: recipe.servings(),
            complexity: recipe.complexity(),
        }
    }
}
