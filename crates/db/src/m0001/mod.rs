mod meal_plan;
mod recipe;
mod user;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "sufra",
    "m0001",
    vec_box![],
    vec_box![
        user::CreateTable,
        user::CreateUk1,
        recipe::CreateTable,
        recipe::CreateIdx1,
        meal_plan::CreateTable,
        meal_plan::CreateUk1,
        meal_plan::CreateIdx1,
    ]
);
