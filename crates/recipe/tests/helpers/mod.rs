use std::{path::PathBuf, str::FromStr, sync::Arc};

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use sufra_nutrition::NutritionLookup;
use sufra_recipe::CreateInput;
use sufra_shared::{
    State,
    recipe::{Ingredient, Nutrition},
};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    sufra_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    Ok(State::single(pool))
}

pub struct FixedLookup(pub Nutrition);

#[async_trait::async_trait]
impl NutritionLookup for FixedLookup {
    async fn lookup(&self, _ingredients: &[Ingredient]) -> anyhow::Result<Nutrition> {
        Ok(self.0)
    }
}

pub struct FailingLookup;

#[async_trait::async_trait]
impl NutritionLookup for FailingLookup {
    async fn lookup(&self, _ingredients: &[Ingredient]) -> anyhow::Result<Nutrition> {
        anyhow::bail!("quota exceeded")
    }
}

#[allow(dead_code)]
pub fn command(state: &State) -> sufra_recipe::Command {
    sufra_recipe::Command::new(
        state.clone(),
        Arc::new(FixedLookup(Nutrition {
            calories: 420.0,
            protein: 12.0,
            fat: 9.0,
            carbs: 70.0,
        })),
    )
}

#[allow(dead_code)]
pub fn pancakes() -> CreateInput {
    CreateInput {
        title: "Pancakes".to_owned(),
        ingredients: vec![
            Ingredient::new("Flour", 2.0, "cups"),
            Ingredient::new("Milk", 1.5, "cups"),
        ],
        steps: vec!["Mix".to_owned(), "Fry".to_owned()],
        tags: vec!["breakfast".to_owned()],
        image_url: String::new(),
    }
}
