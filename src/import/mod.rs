//! Import of externally generated recipe payloads.
//!
//! The generation collaborator returns JSON in its own shape. This
//! module parses those payloads strictly and converts the recipe shape
//! into the validated domain model, applying every construction rule on
//! the way in.

use crate::model::{
    Complexity, RangeError, Recipe, RecipeError, RecipeIngredient, RecipeNutrition, RecipeStep,
};
use thiserror::Error;
use tracing::info;

mod model;

pub use model::{
    GeneratedComplexity, GeneratedIngredient, GeneratedInstruction, GeneratedNutrition,
    GeneratedRecipe, MealDay, MealType, RecipePlan, RecipePlanList,
};

/// Errors that can occur when importing generated payloads.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The payload was not valid JSON or did not match the expected shape.
    #[error("Failed to parse generated payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload parsed but violated a domain rule during conversion.
    #[error(transparent)]
    Recipe(#[from] RecipeError),
}

/// Parses a generated recipe payload without converting it.
///
/// # Errors
///
/// Returns [`ImportError::Json`] if the payload is malformed, is
/// missing a field, or carries a field the shape does not declare.
pub fn parse_recipe(json: &str) -> Result<GeneratedRecipe, ImportError> {
    Ok(serde_json::from_str(json)?)
}

/// Parses a generated meal-plan payload.
///
/// # Errors
///
/// Returns [`ImportError::Json`] if the payload is malformed or uses a
/// meal type or day outside the allowed literals.
pub fn parse_plan(json: &str) -> Result<RecipePlanList, ImportError> {
    Ok(serde_json::from_str(json)?)
}

/// Parses a generated recipe payload and converts it into a validated
/// [`Recipe`].
///
/// Instructions are ordered by their step number before conversion, and
/// fractional macro grams are rounded to the nearest whole gram.
///
/// # Arguments
///
/// * `json` - The raw payload returned by the generator
///
/// # Errors
///
/// Returns [`ImportError::Json`] if the payload does not match the
/// generated shape, or [`ImportError::Recipe`] if any converted value
/// violates a domain rule.
///
/// # Examples
///
/// ```
/// use recipe_box::import_recipe;
///
/// let recipe = import_recipe(r#"{
///     "title": "Garlic Butter Noodles",
///     "description": "Quick pantry noodles.",
///     "complexity": "Easy",
///     "dietary_preferences": "vegetarian",
///     "ingredients": [{"name": "Noodles", "quantity": "200g"}],
///     "instructions": [{"step_number": 1, "description": "Boil the noodles."}],
///     "number_of_servings": 1,
///     "nutritional_info": {"calories": 450, "protein": 11.0, "fat": 14.5, "carbohydrates": 62.0}
/// }"#)?;
/// assert_eq!(recipe.name(), "Garlic Butter Noodles");
/// assert_eq!(recipe.nutrition().fat(), 15);
/// # Ok::<(), recipe_box::ImportError>(())
/// ```
pub fn import_recipe(json: &str) -> Result<Recipe, ImportError> {
    let generated = parse_recipe(json)?;
    let recipe = Recipe::try_from(generated)?;
    info!(id = %recipe.id(), name = %recipe.name(), "imported generated recipe");
    Ok(recipe)
}

impl From<GeneratedComplexity> for Complexity {
    fn from(complexity: GeneratedComplexity) -> Self {
        match complexity {
            GeneratedComplexity::Easy => Complexity::Low,
            GeneratedComplexity::Medium => Complexity::Medium,
            GeneratedComplexity::Hard => Complexity::High,
        }
    }
}

impl TryFrom<GeneratedNutrition> for RecipeNutrition {
    type Error = RangeError;

    fn try_from(nutrition: GeneratedNutrition) -> Result<Self, Self::Error> {
        RecipeNutrition::new(
            nutrition.calories,
            round_grams(nutrition.carbohydrates),
            round_grams(nutrition.fat),
            round_grams(nutrition.protein),
        )
    }
}

// The domain stores whole grams; rounding happens before range checks.
fn round_grams(value: f64) -> i32 {
    value.round() as i32
}

impl TryFrom<GeneratedRecipe> for Recipe {
    type Error = RecipeError;

    fn try_from(generated: GeneratedRecipe) -> Result<Self, Self::Error> {
        let mut instructions = generated.instructions;
        instructions.sort_by_key(|instruction| instruction.step_number);

        // Generated payloads carry no timing, so steps start at zero.
        let steps = instructions
            .into_iter()
            .map(|instruction| RecipeStep::new(instruction.description))
            .collect::<Result<Vec<_>, _>>()?;

        let ingredients = generated
            .ingredients
            .into_iter()
            .map(|ingredient| RecipeIngredient::new(ingredient.name, ingredient.quantity))
            .collect();

        let nutrition = RecipeNutrition::try_from(generated.nutritional_info)?;

        // dietary_preferences has no domain counterpart and is dropped here.
        Recipe::builder(generated.title)
            .servings(generated.number_of_servings)
            .description(generated.description)
            .complexity(generated.complexity.into())
            .nutrition(nutrition)
            .ingredients(ingredients)
            .steps(steps)
            .build()
    }
}
