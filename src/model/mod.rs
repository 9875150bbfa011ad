mod ingredient;
mod nutrition;
mod step;

pub use ingredient::RecipeIngredient;
pub use nutrition::RecipeNutrition;
pub use step::RecipeStep;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;
use uuid::Uuid;

/// Minimum character count for recipe names and step texts.
const MIN_TEXT_LEN: usize = 3;

/// Errors for textual fields failing the minimum-length rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Recipe name must be at least 3 characters and not blank, got {0:?}")]
    RecipeName(String),

    #[error("Step text must be at least 3 characters and not blank, got {0:?}")]
    StepText(String),
}

/// Errors for numeric fields failing their range rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Servings must be at least 1, got {0}")]
    Servings(i32),

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: i32 },

    #[error("Hands-on time {hands_on} exceeds total time {total}")]
    HandsOnExceedsTotal { hands_on: i32, total: i32 },
}

/// Any rule failure the recipe model can produce.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecipeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Range(#[from] RangeError),
}

/// Shared rule for recipe names and step texts. Length counts raw
/// characters, so a padded name like "  a" passes while "   " does not.
pub(crate) fn is_blank_or_short(value: &str) -> bool {
    value.trim().is_empty() || value.chars().count() < MIN_TEXT_LEN
}

pub(crate) fn non_negative(field: &'static str, value: i32) -> Result<i32, RangeError> {
    if value < 0 {
        return Err(RangeError::Negative { field, value });
    }
    Ok(value)
}

fn validate_servings(value: i32) -> Result<i32, RangeError> {
    if value < 1 {
        return Err(RangeError::Servings(value));
    }
    Ok(value)
}

/// Opaque identifier assigned to a recipe when it is constructed.
///
/// Generated ids are random UUIDs. Fixed ids can be supplied through
/// [`RecipeBuilder::id`] where deterministic identities are needed, such
/// as in tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    /// Generates a fresh random id.
    pub fn generate() -> Self {
        RecipeId(Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecipeId {
    fn from(value: String) -> Self {
        RecipeId(value)
    }
}

impl From<&str> for RecipeId {
    fn from(value: &str) -> Self {
        RecipeId(value.to_string())
    }
}

/// Difficulty tier assigned to a recipe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Complexity {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Complexity::Low => "Low",
            Complexity::Medium => "Medium",
            Complexity::High => "High",
        };
        f.write_str(name)
    }
}

/// A dish: identity, descriptive fields, and owned ingredient, step and
/// nutrition data.
///
/// The name and servings rules hold at every point in the recipe's life.
/// Construction and every mutation validate before committing, so a
/// rejected update leaves the previous valid state in place. The id is
/// assigned once at construction and never changes.
///
/// Serialization produces the catalog wire shape (`recipeId`,
/// `recipeName`, `servings`, `description`, `recipeComplexity`,
/// `ingredients`, `recipeSteps`, `nutritionInfo`), and deserialization
/// re-applies every construction rule.
///
/// # Examples
///
/// ```
/// use recipe_box::{Recipe, RecipeIngredient, RecipeStep};
///
/// let mut recipe = Recipe::new("Spaghetti Bolognese", 4)?;
/// recipe.add_ingredient(RecipeIngredient::new("Spaghetti", "400g"));
/// recipe.add_step(RecipeStep::with_times("Boil the pasta", 10, 2)?);
/// assert_eq!(recipe.ingredients().len(), 1);
/// assert_eq!(recipe.steps()[0].hands_on_time(), 2);
/// # Ok::<(), recipe_box::RecipeError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RecipeWire")]
pub struct Recipe {
    #[serde(rename = "recipeId")]
    id: RecipeId,
    #[serde(rename = "recipeName")]
    name: String,
    servings: i32,
    description: String,
    #[serde(rename = "recipeComplexity")]
    complexity: Complexity,
    ingredients: Vec<RecipeIngredient>,
    #[serde(rename = "recipeSteps")]
    steps: Vec<RecipeStep>,
    #[serde(rename = "nutritionInfo")]
    nutrition: RecipeNutrition,
}

impl Recipe {
    /// Creates a recipe from the two required fields, with everything
    /// else at its default.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for a blank or sub-3-character name,
    /// or a `RangeError` for servings below 1.
    pub fn new(name: impl Into<String>, servings: i32) -> Result<Self, RecipeError> {
        Recipe::builder(name).servings(servings).build()
    }

    /// Starts a builder for the full field set.
    ///
    /// Defaults: servings 1, empty description, medium complexity,
    /// zero-valued nutrition, no ingredients or steps, generated id.
    pub fn builder(name: impl Into<String>) -> RecipeBuilder {
        RecipeBuilder {
            id: None,
            name: name.into(),
            servings: 1,
            description: String::new(),
            complexity: Complexity::default(),
            nutrition: RecipeNutrition::default(),
            ingredients: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Returns the recipe's id.
    pub fn id(&self) -> &RecipeId {
        &self.id
    }

    /// Returns the recipe's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of servings.
    pub fn servings(&self) -> i32 {
        self.servings
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the complexity tier.
    pub fn complexity(&self) -> Complexity {
        self.complexity
    }

    /// Returns the ingredients in insertion order.
    pub fn ingredients(&self) -> &[RecipeIngredient] {
        &self.ingredients
    }

    /// Returns the steps in order.
    pub fn steps(&self) -> &[RecipeStep] {
        &self.steps
    }

    /// Returns the steps for in-place mutation. The sequence itself stays
    /// fixed; new steps go through [`add_step`](Recipe::add_step).
    pub fn steps_mut(&mut self) -> &mut [RecipeStep] {
        &mut self.steps
    }

    /// Returns the nutrition record.
    pub fn nutrition(&self) -> &RecipeNutrition {
        &self.nutrition
    }

    /// Returns the nutrition record for mutation.
    pub fn nutrition_mut(&mut self) -> &mut RecipeNutrition {
        &mut self.nutrition
    }

    /// Renames the recipe, re-applying the construction rule.
    pub fn set_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        if is_blank_or_short(&value) {
            return Err(ValidationError::RecipeName(value));
        }
        self.name = value;
        Ok(())
    }

    /// Sets the number of servings, which must stay at least 1.
    pub fn set_servings(&mut self, value: i32) -> Result<(), RangeError> {
        self.servings = validate_servings(value)?;
        Ok(())
    }

    /// Replaces the description.
    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    /// Sets the complexity tier.
    pub fn set_complexity(&mut self, value: Complexity) {
        self.complexity = value;
    }

    /// Appends an ingredient.
    pub fn add_ingredient(&mut self, ingredient: RecipeIngredient) {
        self.ingredients.push(ingredient);
    }

    /// Appends a step.
    pub fn add_step(&mut self, step: RecipeStep) {
        self.steps.push(step);
    }
}

// Recipes compare and hash by identity; their content may differ.
impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Recipe {}

impl Hash for Recipe {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Builder enumerating every construction default of [`Recipe`].
#[derive(Debug, Clone)]
pub struct RecipeBuilder {
    id: Option<RecipeId>,
    name: String,
    servings: i32,
    description: String,
    complexity: Complexity,
    nutrition: RecipeNutrition,
    ingredients: Vec<RecipeIngredient>,
    steps: Vec<RecipeStep>,
}

impl RecipeBuilder {
    /// Overrides the generated id.
    pub fn id(mut self, id: impl Into<RecipeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the number of servings (default 1).
    pub fn servings(mut self, servings: i32) -> Self {
        self.servings = servings;
        self
    }

    /// Sets the description (default empty).
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the complexity tier (default medium).
    pub fn complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = complexity;
        self
    }

    /// Sets the nutrition record (default zero-valued).
    pub fn nutrition(mut self, nutrition: RecipeNutrition) -> Self {
        self.nutrition = nutrition;
        self
    }

    /// Appends one ingredient.
    pub fn ingredient(mut self, ingredient: RecipeIngredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Replaces the ingredient list (default empty).
    pub fn ingredients(mut self, ingredients: Vec<RecipeIngredient>) -> Self {
        self.ingredients = ingredients;
        self
    }

    /// Appends one step.
    pub fn step(mut self, step: RecipeStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Replaces the step list (default empty).
    pub fn steps(mut self, steps: Vec<RecipeStep>) -> Self {
        self.steps = steps;
        self
    }

    /// Validates the collected fields and produces the recipe.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for a bad name or a `RangeError` for
    /// servings below 1.
    pub fn build(self) -> Result<Recipe, RecipeError> {
        if is_blank_or_short(&self.name) {
            return Err(ValidationError::RecipeName(self.name).into());
        }
        let servings = validate_servings(self.servings)?;
        Ok(Recipe {
            id: self.id.unwrap_or_else(RecipeId::generate),
            name: self.name,
            servings,
            description: self.description,
            complexity: self.complexity,
            ingredients: self.ingredients,
            steps: self.steps,
            nutrition: self.nutrition,
        })
    }
}

#[derive(Deserialize)]
struct RecipeWire {
    #[serde(rename = "recipeId", default)]
    id: Option<RecipeId>,
    #[serde(rename = "recipeName")]
    name: String,
    #[serde(default = "default_servings")]
    servings: i32,
    #[serde(default)]
    description: String,
    #[serde(rename = "recipeComplexity", default)]
    complexity: Complexity,
    #[serde(default)]
    ingredients: Vec<RecipeIngredient>,
    #[serde(rename = "recipeSteps", default)]
    steps: Vec<RecipeStep>,
    #[serde(rename = "nutritionInfo", default)]
    nutrition: RecipeNutrition,
}

fn default_servings() -> i32 {
    1
}

impl TryFrom<RecipeWire> for Recipe {
    type Error = RecipeError;

    fn try_from(wire: RecipeWire) -> Result<Self, Self::Error> {
        let mut builder = Recipe::builder(wire.name)
            .servings(wire.servings)
            .description(wire.description)
            .complexity(wire.complexity)
            .nutrition(wire.nutrition)
            .ingredients(wire.ingredients)
            .steps(wire.steps);
        if let Some(id) = wire.id {
            builder = builder.id(id);
        }
        builder.build()
    }
}
