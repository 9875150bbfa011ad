use super::{non_negative, RangeError};
use serde::{Deserialize, Serialize};

/// Per-serving nutrition facts: calories plus macro gram counts.
///
/// Every field is independently constrained to be non-negative; there is
/// no cross-field rule. `Default` is the zero-valued record used when a
/// recipe is built without nutrition data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NutritionWire")]
pub struct RecipeNutrition {
    calories: i32,
    carbs: i32,
    fat: i32,
    protein: i32,
}

impl RecipeNutrition {
    /// Creates a nutrition record, validating every field.
    ///
    /// # Errors
    ///
    /// Returns a `RangeError` naming the first negative field.
    pub fn new(calories: i32, carbs: i32, fat: i32, protein: i32) -> Result<Self, RangeError> {
        Ok(RecipeNutrition {
            calories: non_negative("calories", calories)?,
            carbs: non_negative("carbs", carbs)?,
            fat: non_negative("fat", fat)?,
            protein: non_negative("protein", protein)?,
        })
    }

    /// Returns the calorie count.
    pub fn calories(&self) -> i32 {
        self.calories
    }

    /// Returns the carbohydrate grams.
    pub fn carbs(&self) -> i32 {
        self.carbs
    }

    /// Returns the fat grams.
    pub fn fat(&self) -> i32 {
        self.fat
    }

    /// Returns the protein grams.
    pub fn protein(&self) -> i32 {
        self.protein
    }

    /// Sets the calorie count, rejecting negative values.
    pub fn set_calories(&mut self, value: i32) -> Result<(), RangeError> {
        self.calories = non_negative("calories", value)?;
        Ok(())
    }

    /// Sets the carbohydrate grams, rejecting negative values.
    pub fn set_carbs(&mut self, value: i32) -> Result<(), RangeError> {
        self.carbs = non_negative("carbs", value)?;
        Ok(())
    }

    /// Sets the fat grams, rejecting negative values.
    pub fn set_fat(&mut self, value: i32) -> Result<(), RangeError> {
        self.fat = non_negative("fat", value)?;
        Ok(())
    }

    /// Sets the protein grams, rejecting negative values.
    pub fn set_protein(&mut self, value: i32) -> Result<(), RangeError> {
        self.protein = non_negative("protein", value)?;
        Ok(())
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct NutritionWire {
    calories: i32,
    carbs: i32,
    fat: i32,
    protein: i32,
}

impl TryFrom<NutritionWire> for RecipeNutrition {
    type Error = RangeError;

    fn try_from(wire: NutritionWire) -> Result<Self, Self::Error> {
        RecipeNutrition::new(wire.calories, wire.carbs, wire.fat, wire.protein)
    }
}
