use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use sufra_recipe::{CreateInput, UpdateInput};

use super::AppState;
use crate::{
    auth::AuthUser,
    error::{AppError, AppResult, JsonBody},
    language::Language,
};

/// GET /api/recipes
pub async fn list(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> AppResult<impl IntoResponse> {
    let recipes = state.recipe_query.list(&user.id).await?;

    Ok(Json(json!({ "success": true, "recipes": recipes })))
}

/// POST /api/recipes
pub async fn create(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    JsonBody(input): JsonBody<CreateInput>,
) -> AppResult<impl IntoResponse> {
    let recipe = state.recipe_command.create(input, &user.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "recipe": recipe })),
    ))
}

/// GET /api/recipes/{id}
pub async fn find(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let recipe = state
        .recipe_query
        .find(id, &user.id)
        .await?
        .ok_or(AppError::NotFound("Recipe not found"))?;

    Ok(Json(json!({ "success": true, "recipe": recipe })))
}

/// PUT /api/recipes/{id}
pub async fn update(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    JsonBody(recipe): JsonBody<CreateInput>,
) -> AppResult<impl IntoResponse> {
    let recipe = state
        .recipe_command
        .update(UpdateInput { id, recipe }, &user.id)
        .await?;

    Ok(Json(json!({ "success": true, "recipe": recipe })))
}

/// DELETE /api/recipes/{id}
pub async fn delete(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    language: Language,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    state.recipe_command.delete(id, &user.id).await?;

    Ok(Json(json!({
        "success": true,
        "message": language.translate("Recipe deleted"),
    })))
}
