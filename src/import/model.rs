use serde::{Deserialize, Serialize};
use std::fmt;

/// Recipe payload returned by the external generation collaborator.
///
/// Parsing is strict: unknown fields are rejected and `complexity`
/// admits only the literals the generator is prompted with. The payload
/// carries no domain guarantees until it is converted into a
/// [`Recipe`](crate::Recipe).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratedRecipe {
    pub title: String,
    pub description: String,
    pub complexity: GeneratedComplexity,
    pub dietary_preferences: String,
    pub ingredients: Vec<GeneratedIngredient>,
    pub instructions: Vec<GeneratedInstruction>,
    pub number_of_servings: i32,
    pub nutritional_info: GeneratedNutrition,
}

/// Difficulty literal used by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeneratedComplexity {
    Easy,
    Medium,
    Hard,
}

/// One generated ingredient line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratedIngredient {
    pub name: String,
    pub quantity: String,
}

/// One generated instruction, positioned by its step number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratedInstruction {
    pub step_number: i32,
    pub description: String,
}

/// Generated nutrition facts; macros arrive as fractional grams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratedNutrition {
    pub calories: i32,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrates: f64,
}

/// Meal slot a planned recipe is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        };
        f.write_str(name)
    }
}

/// Day of the week a planned recipe is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl fmt::Display for MealDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MealDay::Monday => "monday",
            MealDay::Tuesday => "tuesday",
            MealDay::Wednesday => "wednesday",
            MealDay::Thursday => "thursday",
            MealDay::Friday => "friday",
            MealDay::Saturday => "saturday",
            MealDay::Sunday => "sunday",
        };
        f.write_str(name)
    }
}

/// One planned meal: a recipe title placed on a day and meal slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecipePlan {
    pub recipe_title: String,
    pub meal_type: MealType,
    pub meal_day: MealDay,
}

/// The list wrapper a generated meal plan arrives in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecipePlanList {
    pub recipe_plan: Vec<RecipePlan>,
}
