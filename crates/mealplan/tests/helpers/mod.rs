use std::{path::PathBuf, str::FromStr, sync::Arc};

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use sufra_recipe::CreateInput;
use sufra_shared::{State, recipe::Ingredient};

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

pub async fn create_recipe(
    state: &State,
    user_id: &str,
    title: &str,
    ingredients: Vec<Ingredient>,
) -> anyhow::Result<String> {
    let cmd = sufra_recipe::Command::new(state.clone(), Arc::new(sufra_nutrition::Disabled));
    let recipe = cmd
        .create(
            CreateInput {
                title: title.to_owned(),
                ingredients,
                steps: vec!["Cook".to_owned()],
                ..Default::default()
            },
            user_id,
        )
        .await?;

    Ok(recipe.id)
}
