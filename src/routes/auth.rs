use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde_json::json;
use sufra_user::{LoginInput, RegisterInput, User};

use super::AppState;
use crate::{
    auth::{AuthUser, build_cookie, removal_cookie},
    error::{AppResult, JsonBody},
    language::Language,
};

fn token_for(state: &AppState, user: &User) -> anyhow::Result<String> {
    sufra_user::jwt::generate(
        &user.id,
        &state.config.jwt.secret,
        state.config.jwt.expiration_days,
    )
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<RegisterInput>,
) -> AppResult<impl IntoResponse> {
    let user = state.user_command.register(input).await?;
    let token = token_for(&state, &user)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "user": user, "token": token })),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    JsonBody(input): JsonBody<LoginInput>,
) -> AppResult<impl IntoResponse> {
    let user = state.user_command.login(input).await?;
    let token = token_for(&state, &user)?;

    tracing::info!(user_id = %user.id, "user logged in");

    Ok((
        jar.add(build_cookie(&state.config.jwt, token.to_owned())),
        Json(json!({ "success": true, "user": user, "token": token })),
    ))
}

/// POST /api/auth/logout
pub async fn logout(jar: CookieJar, language: Language) -> impl IntoResponse {
    (
        jar.add(removal_cookie()),
        Json(json!({ "success": true, "message": language.translate("Logged out") })),
    )
}

/// GET /api/auth/me
pub async fn me(AuthUser(user): AuthUser) -> impl IntoResponse {
    Json(json!({ "success": true, "user": user }))
}
