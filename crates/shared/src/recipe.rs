use serde::{Deserialize, Serialize};
use validator::Validate;

/// One ingredient line of a recipe.
///
/// `amount` and `unit` default when absent so that partially filled
/// payloads still reach validation instead of failing deserialization.
#[derive(Serialize, Deserialize, Validate, Clone, Debug, Default, PartialEq)]
pub struct Ingredient {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub amount: f64,
    #[serde(default)]
    #[validate(length(max = 30))]
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
        }
    }

    /// Trims surrounding whitespace from name and unit.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            amount: self.amount,
            unit: self.unit.trim().to_owned(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}
