use sea_query::{Expr, ExprTrait, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow, types::Json};
use sufra_db::table::{MealPlan, Recipe};
use sufra_shared::recipe::{Ingredient, Nutrition};

#[derive(FromRow)]
pub struct RecipeRow {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub ingredients: Json<Vec<Ingredient>>,
    pub steps: Json<Vec<String>>,
    pub tags: Json<Vec<String>>,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub image_url: String,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

impl From<RecipeRow> for crate::Recipe {
    fn from(row: RecipeRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            ingredients: row.ingredients.0,
            steps: row.steps.0,
            tags: row.tags.0,
            nutrition: Nutrition {
                calories: row.calories,
                protein: row.protein,
                fat: row.fat,
                carbs: row.carbs,
            },
            image_url: row.image_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn select() -> SelectStatement {
    Query::select()
        .columns([
            Recipe::Id,
            Recipe::UserId,
            Recipe::Title,
            Recipe::Ingredients,
            Recipe::Steps,
            Recipe::Tags,
            Recipe::Calories,
            Recipe::Protein,
            Recipe::Fat,
            Recipe::Carbs,
            Recipe::ImageUrl,
            Recipe::CreatedAt,
            Recipe::UpdatedAt,
        ])
        .from(Recipe::Table)
        .to_owned()
}

pub(crate) async fn find(
    pool: &SqlitePool,
    id: String,
    user_id: String,
) -> sufra_shared::Result<Option<RecipeRow>> {
    let statement = select()
        .and_where(Expr::col(Recipe::Id).eq(id))
        .and_where(Expr::col(Recipe::UserId).eq(user_id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn filter(
    pool: &SqlitePool,
    user_id: String,
    ids: Option<Vec<String>>,
) -> sufra_shared::Result<Vec<RecipeRow>> {
    let mut statement = select()
        .and_where(Expr::col(Recipe::UserId).eq(user_id))
        .order_by(Recipe::CreatedAt, Order::Desc)
        .order_by_expr(Expr::cust("rowid"), Order::Desc)
        .to_owned();

    if let Some(ids) = ids {
        statement.and_where(Expr::col(Recipe::Id).is_in(ids));
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

pub(crate) async fn create(pool: &SqlitePool, recipe: &crate::Recipe) -> sufra_shared::Result<()> {
    let statement = Query::insert()
        .into_table(Recipe::Table)
        .columns([
            Recipe::Id,
            Recipe::UserId,
            Recipe::Title,
            Recipe::Ingredients,
            Recipe::Steps,
            Recipe::Tags,
            Recipe::Calories,
            Recipe::Protein,
            Recipe::Fat,
            Recipe::Carbs,
            Recipe::ImageUrl,
            Recipe::CreatedAt,
        ])
        .values_panic([
            recipe.id.to_owned().into(),
            recipe.user_id.to_owned().into(),
            recipe.title.to_owned().into(),
            serde_json::to_string(&recipe.ingredients)?.into(),
            serde_json::to_string(&recipe.steps)?.into(),
            serde_json::to_string(&recipe.tags)?.into(),
            recipe.nutrition.calories.into(),
            recipe.nutrition.protein.into(),
            recipe.nutrition.fat.into(),
            recipe.nutrition.carbs.into(),
            recipe.image_url.to_owned().into(),
            recipe.created_at.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) async fn update(pool: &SqlitePool, recipe: &crate::Recipe) -> sufra_shared::Result<u64> {
    let statement = Query::update()
        .table(Recipe::Table)
        .value(Recipe::Title, recipe.title.to_owned())
        .value(
            Recipe::Ingredients,
            serde_json::to_string(&recipe.ingredients)?,
        )
        .value(Recipe::Steps, serde_json::to_string(&recipe.steps)?)
        .value(Recipe::Tags, serde_json::to_string(&recipe.tags)?)
        .value(Recipe::Calories, recipe.nutrition.calories)
        .value(Recipe::Protein, recipe.nutrition.protein)
        .value(Recipe::Fat, recipe.nutrition.fat)
        .value(Recipe::Carbs, recipe.nutrition.carbs)
        .value(Recipe::ImageUrl, recipe.image_url.to_owned())
        .value(Recipe::UpdatedAt, recipe.updated_at)
        .and_where(Expr::col(Recipe::Id).eq(recipe.id.to_owned()))
        .and_where(Expr::col(Recipe::UserId).eq(recipe.user_id.to_owned()))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.rows_affected())
}

/// Deletes the recipe and every meal plan entry pointing at it.
pub(crate) async fn delete(
    pool: &SqlitePool,
    id: String,
    user_id: String,
) -> sufra_shared::Result<u64> {
    let mut tx = pool.begin().await?;

    let statement = Query::delete()
        .from_table(Recipe::Table)
        .and_where(Expr::col(Recipe::Id).eq(id.to_owned()))
        .and_where(Expr::col(Recipe::UserId).eq(user_id.to_owned()))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let deleted = sqlx::query_with(&sql, values)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if deleted > 0 {
        let statement = Query::delete()
            .from_table(MealPlan::Table)
            .and_where(Expr::col(MealPlan::RecipeId).eq(id))
            .and_where(Expr::col(MealPlan::UserId).eq(user_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;
    }

    tx.commit().await?;

    Ok(deleted)
}
