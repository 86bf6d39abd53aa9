//! Nutrition totals for a list of ingredients.
//!
//! [`Spoonacular`] asks the Spoonacular ingredient parser for per-ingredient
//! nutrients and sums them. [`Disabled`] is used when no API key is set.

mod spoonacular;

pub use spoonacular::{DEFAULT_BASE_URL, Spoonacular};

use sufra_shared::recipe::{Ingredient, Nutrition};

#[async_trait::async_trait]
pub trait NutritionLookup: Send + Sync {
    async fn lookup(&self, ingredients: &[Ingredient]) -> anyhow::Result<Nutrition>;
}

pub struct Disabled;

#[async_trait::async_trait]
impl NutritionLookup for Disabled {
    async fn lookup(&self, _ingredients: &[Ingredient]) -> anyhow::Result<Nutrition> {
        Ok(Nutrition::default())
    }
}
