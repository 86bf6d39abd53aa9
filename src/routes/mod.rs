use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use sqlx::SqlitePool;
use sufra_nutrition::NutritionLookup;
use sufra_shared::State;

mod auth;
mod grocery_list;
mod health;
mod meal_plans;
mod recipes;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub user_command: sufra_user::Command,
    pub user_query: sufra_user::Query,
    pub recipe_command: sufra_recipe::Command,
    pub recipe_query: sufra_recipe::Query,
    pub mealplan_command: sufra_mealplan::Command,
    pub mealplan_query: sufra_mealplan::Query,
    pub shopping_query: sufra_shopping::Query,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(
        config: crate::config::Config,
        state: State,
        nutrition: Arc<dyn NutritionLookup>,
    ) -> Self {
        Self {
            config,
            user_command: sufra_user::Command::new(state.clone()),
            user_query: sufra_user::Query::new(state.clone()),
            recipe_command: sufra_recipe::Command::new(state.clone(), nutrition),
            recipe_query: sufra_recipe::Query::new(state.clone()),
            mealplan_command: sufra_mealplan::Command::new(state.clone()),
            mealplan_query: sufra_mealplan::Query::new(state.clone()),
            shopping_query: sufra_shopping::Query::new(state.clone()),
            pool: state.read_db,
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    let api = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me))
        .route("/recipes", get(recipes::list).post(recipes::create))
        .route(
            "/recipes/{id}",
            get(recipes::find)
                .put(recipes::update)
                .delete(recipes::delete),
        )
        .route("/meal-plans", get(meal_plans::list).post(meal_plans::assign))
        .route("/meal-plans/{id}", axum::routing::delete(meal_plans::delete))
        .route("/grocery-list", get(grocery_list::page));

    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .nest("/api", api)
        .fallback(fallback)
        .layer(middleware::from_fn(crate::middleware::localize_errors))
        .with_state(app_state)
}

async fn fallback() -> crate::error::AppError {
    crate::error::AppError::NotFound("Not found")
}
