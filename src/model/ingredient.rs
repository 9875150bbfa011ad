use serde::{Deserialize, Serialize};

/// A single ingredient line: a name plus a free-form amount.
///
/// Amounts stay as text ("400g", "1 cup") rather than parsed quantities;
/// neither field carries validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Ingredient name
    #[serde(rename = "ingredientName")]
    pub name: String,
    /// Free-form amount, empty when unspecified
    #[serde(rename = "ingredientAmount", default)]
    pub amount: String,
}

impl RecipeIngredient {
    /// Creates an ingredient from a name and an amount string.
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        RecipeIngredient {
            name: name.into(),
            amount: amount.into(),
        }
    }
}
