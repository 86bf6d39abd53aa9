rust_i18n::i18n!("locales", fallback = "en");

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod language;
pub mod middleware;
pub mod observability;
pub mod routes;

pub use config::Config;
pub use routes::AppState;

/// Create app router for testing
///
/// Builds the full router over `pool` without compression or tracing
/// layers, useful for integration testing without starting the server.
pub fn create_app(
    config: Config,
    pool: sqlx::SqlitePool,
    nutrition: std::sync::Arc<dyn sufra_nutrition::NutritionLookup>,
) -> axum::Router {
    routes::router(AppState::new(
        config,
        sufra_shared::State::single(pool),
        nutrition,
    ))
}
