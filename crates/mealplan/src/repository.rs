use sea_query::{Expr, ExprTrait, OnConflict, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow, types::Text};
use sufra_db::table::MealPlan;
use sufra_shared::mealplan::{Day, MealType};

#[derive(FromRow)]
pub struct MealPlanRow {
    pub id: String,
    pub user_id: String,
    pub day: Text<Day>,
    pub meal_type: Text<MealType>,
    pub recipe_id: String,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

impl From<MealPlanRow> for crate::MealPlan {
    fn from(row: MealPlanRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            day: row.day.0,
            meal_type: row.meal_type.0,
            recipe_id: row.recipe_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const COLUMNS: [MealPlan; 7] = [
    MealPlan::Id,
    MealPlan::UserId,
    MealPlan::Day,
    MealPlan::MealType,
    MealPlan::RecipeId,
    MealPlan::CreatedAt,
    MealPlan::UpdatedAt,
];

/// Inserts `entry`, or points the existing (user, day, meal type) slot at
/// `entry.recipe_id`. Returns the stored row.
pub(crate) async fn upsert(
    pool: &SqlitePool,
    entry: &crate::MealPlan,
) -> sufra_shared::Result<MealPlanRow> {
    let statement = Query::insert()
        .into_table(MealPlan::Table)
        .columns(COLUMNS)
        .values_panic([
            entry.id.to_owned().into(),
            entry.user_id.to_owned().into(),
            entry.day.to_string().into(),
            entry.meal_type.to_string().into(),
            entry.recipe_id.to_owned().into(),
            entry.created_at.into(),
            entry.updated_at.into(),
        ])
        .on_conflict(
            OnConflict::columns([MealPlan::UserId, MealPlan::Day, MealPlan::MealType])
                .update_column(MealPlan::RecipeId)
                .value(MealPlan::UpdatedAt, entry.created_at)
                .to_owned(),
        )
        .returning_all()
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, MealPlanRow, _>(&sql, values)
        .fetch_one(pool)
        .await?)
}

pub(crate) async fn list(pool: &SqlitePool, user_id: String) -> sufra_shared::Result<Vec<MealPlanRow>> {
    let statement = Query::select()
        .columns(COLUMNS)
        .from(MealPlan::Table)
        .and_where(Expr::col(MealPlan::UserId).eq(user_id))
        .order_by(MealPlan::CreatedAt, Order::Asc)
        .order_by_expr(Expr::cust("rowid"), Order::Asc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, MealPlanRow, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

pub(crate) async fn delete(
    pool: &SqlitePool,
    id: String,
    user_id: String,
) -> sufra_shared::Result<u64> {
    let statement = Query::delete()
        .from_table(MealPlan::Table)
        .and_where(Expr::col(MealPlan::Id).eq(id))
        .and_where(Expr::col(MealPlan::UserId).eq(user_id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.rows_affected())
}
