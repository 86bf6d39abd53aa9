mod command;
mod query;
pub(crate) mod repository;

pub use command::*;
pub use query::*;

use serde::Serialize;
use sufra_shared::recipe::{Ingredient, Nutrition};

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    pub tags: Vec<String>,
    pub nutrition: Nutrition,
    pub image_url: String,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}
