use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use sufra_shared::recipe::{Ingredient, Nutrition};

use crate::NutritionLookup;

pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

#[derive(Clone)]
pub struct Spoonacular {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl Spoonacular {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build Spoonacular client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            api_key: api_key.into(),
        })
    }
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct ParsedIngredient {
    #[serde(default)]
    nutrition: Option<ParsedNutrition>,
}

#[derive(Deserialize, Debug, Default)]
struct ParsedNutrition {
    #[serde(default)]
    nutrients: Vec<Nutrient>,
}

#[derive(Deserialize, Debug)]
struct Nutrient {
    name: String,
    #[serde(default)]
    amount: f64,
}

/// One `"{amount} {unit} {name}"` line per ingredient.
pub(crate) fn ingredient_list(ingredients: &[Ingredient]) -> String {
    ingredients
        .iter()
        .map(|i| format!("{} {} {}", i.amount, i.unit, i.name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn sum_nutrients(parsed: &[ParsedIngredient]) -> Nutrition {
    let mut total = Nutrition::default();

    for nutrients in parsed
        .iter()
        .filter_map(|p| p.nutrition.as_ref())
        .map(|n| &n.nutrients)
    {
        let amount_of = |name: &str| {
            nutrients
                .iter()
                .find(|n| n.name == name)
                .map(|n| n.amount)
                .unwrap_or_default()
        };

        total.calories += amount_of("Calories");
        total.protein += amount_of("Protein");
        total.fat += amount_of("Fat");
        total.carbs += amount_of("Carbohydrates");
    }

    Nutrition {
        calories: total.calories.round(),
        protein: total.protein.round(),
        fat: total.fat.round(),
        carbs: total.carbs.round(),
    }
}

#[async_trait::async_trait]
impl NutritionLookup for Spoonacular {
    #[tracing::instrument(skip_all, fields(ingredients = ingredients.len()))]
    async fn lookup(&self, ingredients: &[Ingredient]) -> anyhow::Result<Nutrition> {
        if ingredients.is_empty() {
            return Ok(Nutrition::default());
        }

        let parsed: Vec<ParsedIngredient> = self
            .client
            .post(format!("{}/recipes/parseIngredients", self.base_url))
            .query(&[("apiKey", self.api_key.as_str())])
            .form(&[
                ("ingredientList", ingredient_list(ingredients).as_str()),
                ("includeNutrition", "true"),
                ("servings", "1"),
            ])
            .send()
            .await?
            .error_for_status()
            .context("Spoonacular rejected the ingredient list")?
            .json()
            .await
            .context("Failed to decode Spoonacular response")?;

        let nutrition = sum_nutrients(&parsed);
        tracing::debug!(?nutrition, "nutrition computed");

        Ok(nutrition)
    }
}
