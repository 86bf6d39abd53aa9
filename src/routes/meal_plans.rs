use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use sufra_mealplan::AssignInput;

use super::AppState;
use crate::{
    auth::AuthUser,
    error::{AppResult, JsonBody},
    language::Language,
};

/// GET /api/meal-plans
pub async fn list(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> AppResult<impl IntoResponse> {
    let meal_plans = state.mealplan_query.list(&user.id).await?;

    Ok(Json(json!({ "success": true, "mealPlans": meal_plans })))
}

/// POST /api/meal-plans
///
/// Creates the slot (201) or replaces the recipe already in it (200).
pub async fn assign(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    JsonBody(input): JsonBody<AssignInput>,
) -> AppResult<impl IntoResponse> {
    let (meal_plan, created) = state.mealplan_command.assign(input, &user.id).await?;
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(json!({ "success": true, "mealPlan": meal_plan })),
    ))
}

/// DELETE /api/meal-plans/{id}
pub async fn delete(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    language: Language,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    state.mealplan_command.delete(id, &user.id).await?;

    Ok(Json(json!({
        "success": true,
        "message": language.translate("Meal plan deleted"),
    })))
}
