mod command;
mod query;
pub(crate) mod repository;

pub use command::*;
pub use query::*;

use serde::Serialize;
use sufra_recipe::Recipe;
use sufra_shared::mealplan::{Day, MealType};

/// A recipe assigned to one (day, meal type) slot of a user's week.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub id: String,
    pub user_id: String,
    pub day: Day,
    pub meal_type: MealType,
    pub recipe_id: String,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PlannedMeal {
    #[serde(flatten)]
    pub entry: MealPlan,
    pub recipe: Recipe,
}
