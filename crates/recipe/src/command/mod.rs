use std::sync::Arc;

use serde::Deserialize;
use sufra_nutrition::NutritionLookup;
use sufra_shared::{
    State,
    recipe::{Ingredient, Nutrition},
};
use validator::Validate;

mod create;
mod delete;
mod update;

pub use update::UpdateInput;

#[derive(Clone)]
pub struct Command {
    state: State,
    nutrition: Arc<dyn NutritionLookup>,
}

impl Command {
    pub fn new(state: State, nutrition: Arc<dyn NutritionLookup>) -> Self {
        Self { state, nutrition }
    }

    /// A failed lookup falls back to zeros so the write still goes through.
    async fn nutrition(&self, ingredients: &[Ingredient]) -> Nutrition {
        match self.nutrition.lookup(ingredients).await {
            Ok(nutrition) => nutrition,
            Err(err) => {
                tracing::error!(error = ?err, "nutrition lookup failed");
                Nutrition::default()
            }
        }
    }
}

#[derive(Deserialize, Validate, Clone, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateInput {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1), nested)]
    pub ingredients: Vec<Ingredient>,
    #[validate(length(min = 1))]
    pub steps: Vec<String>,
    pub tags: Vec<String>,
    #[validate(length(max = 2048))]
    pub image_url: String,
}

impl CreateInput {
    /// Trims text fields and drops blank steps and tags.
    pub(crate) fn normalize(self) -> Self {
        let non_blank = |values: Vec<String>| {
            values
                .into_iter()
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .collect::<Vec<_>>()
        };

        Self {
            title: self.title.trim().to_owned(),
            ingredients: self.ingredients.into_iter().map(Ingredient::trimmed).collect(),
            steps: non_blank(self.steps),
            tags: non_blank(self.tags),
            image_url: self.image_url.trim().to_owned(),
        }
    }
}
