use super::{is_blank_or_short, non_negative, RangeError, RecipeError, ValidationError};
use serde::{Deserialize, Serialize};

/// One instructional step of a recipe.
///
/// Timing is split into the step's total duration and the hands-on share
/// of it. The hands-on time can never exceed the total: each single-field
/// setter checks the new value against the current value of the other
/// field, and [`set_times`](RecipeStep::set_times) validates and commits
/// both fields as one pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StepWire")]
pub struct RecipeStep {
    #[serde(rename = "stepText")]
    text: String,
    #[serde(rename = "stepTotalTime")]
    total_time: i32,
    #[serde(rename = "stepHandsOnTime")]
    hands_on_time: i32,
}

impl RecipeStep {
    /// Creates a step with both timing fields at zero.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the text is blank or shorter than
    /// three characters.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if is_blank_or_short(&text) {
            return Err(ValidationError::StepText(text));
        }
        Ok(RecipeStep {
            text,
            total_time: 0,
            hands_on_time: 0,
        })
    }

    /// Creates a step with explicit timing.
    ///
    /// # Arguments
    ///
    /// * `text` - The instructional text
    /// * `total_time` - Total duration of the step
    /// * `hands_on_time` - Active share of the total, at most `total_time`
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for bad text, or a `RangeError` if a
    /// time is negative or the hands-on time exceeds the total.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_box::RecipeStep;
    ///
    /// let step = RecipeStep::with_times("Boil the pasta", 10, 2)?;
    /// assert_eq!(step.hands_on_time(), 2);
    /// assert!(RecipeStep::with_times("Boil water", 5, 10).is_err());
    /// # Ok::<(), recipe_box::RecipeError>(())
    /// ```
    pub fn with_times(
        text: impl Into<String>,
        total_time: i32,
        hands_on_time: i32,
    ) -> Result<Self, RecipeError> {
        let mut step = RecipeStep::new(text)?;
        step.set_times(total_time, hands_on_time)?;
        Ok(step)
    }

    /// Returns the instructional text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the total time.
    pub fn total_time(&self) -> i32 {
        self.total_time
    }

    /// Returns the hands-on time.
    pub fn hands_on_time(&self) -> i32 {
        self.hands_on_time
    }

    /// Replaces the instructional text, re-applying the construction rule.
    pub fn set_text(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        if is_blank_or_short(&value) {
            return Err(ValidationError::StepText(value));
        }
        self.text = value;
        Ok(())
    }

    /// Sets the total time.
    ///
    /// # Errors
    ///
    /// Returns a `RangeError` if `value` is negative or smaller than the
    /// current hands-on time.
    pub fn set_total_time(&mut self, value: i32) -> Result<(), RangeError> {
        let value = non_negative("total time", value)?;
        if self.hands_on_time > value {
            return Err(RangeError::HandsOnExceedsTotal {
                hands_on: self.hands_on_time,
                total: value,
            });
        }
        self.total_time = value;
        Ok(())
    }

    /// Sets the hands-on time.
    ///
    /// # Errors
    ///
    /// Returns a `RangeError` if `value` is negative or exceeds the
    /// current total time.
    pub fn set_hands_on_time(&mut self, value: i32) -> Result<(), RangeError> {
        let value = non_negative("hands-on time", value)?;
        if value > self.total_time {
            return Err(RangeError::HandsOnExceedsTotal {
                hands_on: value,
                total: self.total_time,
            });
        }
        self.hands_on_time = value;
        Ok(())
    }

    /// Updates both timing fields as one pair.
    ///
    /// Some changes are unreachable through the single-field setters:
    /// shrinking `(5, 5)` to `(3, 3)` fails total-first because the old
    /// hands-on time still exceeds the new total. This validates the new
    /// pair as a whole and commits both fields, or neither.
    pub fn set_times(&mut self, total_time: i32, hands_on_time: i32) -> Result<(), RangeError> {
        let total_time = non_negative("total time", total_time)?;
        let hands_on_time = non_negative("hands-on time", hands_on_time)?;
        if hands_on_time > total_time {
            return Err(RangeError::HandsOnExceedsTotal {
                hands_on: hands_on_time,
                total: total_time,
            });
        }
        self.total_time = total_time;
        self.hands_on_time = hands_on_time;
        Ok(())
    }
}

#[derive(Deserialize)]
struct StepWire {
    #[serde(rename = "stepText")]
    text: String,
    #[serde(rename = "stepTotalTime", default)]
    total_time: i32,
    #[serde(rename = "stepHandsOnTime", default)]
    hands_on_time: i32,
}

impl TryFrom<StepWire> for RecipeStep {
    type Error = RecipeError;

    fn try_from(wire: StepWire) -> Result<Self, Self::Error> {
        RecipeStep::with_times(wire.text, wire.total_time, wire.hands_on_time)
    }
}
