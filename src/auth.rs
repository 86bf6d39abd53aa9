use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use sufra_user::User;

use crate::{config::JwtConfig, error::AppError, routes::AppState};

pub const AUTH_COOKIE_NAME: &str = "token";

pub fn build_cookie<'a>(config: &JwtConfig, token: String) -> Cookie<'a> {
    Cookie::build((AUTH_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(config.cookie_max_age_days))
        .build()
}

/// Expired empty `token` cookie, sent on logout whether or not one was set.
pub fn removal_cookie<'a>() -> Cookie<'a> {
    Cookie::build((AUTH_COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::ZERO)
        .build()
}

/// The authenticated user, from a bearer token or the `token` cookie.
pub struct AuthUser(pub User);

fn bearer(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_owned())
        .filter(|token| !token.is_empty())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = match bearer(parts) {
            Some(token) => token,
            None => CookieJar::from_headers(&parts.headers)
                .get(AUTH_COOKIE_NAME)
                .map(|cookie| cookie.value().to_owned())
                .filter(|token| !token.is_empty())
                .ok_or(AppError::Unauthorized("No token provided"))?,
        };

        let claims = sufra_user::jwt::validate(&token, &state.config.jwt.secret).map_err(|err| {
            tracing::debug!(error = ?err, "rejected token");
            AppError::Unauthorized("Invalid token")
        })?;

        let user = state
            .user_query
            .find(claims.sub)
            .await?
            .ok_or(AppError::NotFound("User not found"))?;

        Ok(AuthUser(user))
    }
}
