use axum::{
    Json,
    extract::{Query, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::{auth::AuthUser, error::AppResult};

#[derive(Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    Text,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct GroceryListParams {
    pub format: Format,
}

/// GET /api/grocery-list
pub async fn page(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(params): Query<GroceryListParams>,
) -> AppResult<Response> {
    let items = state.shopping_query.grocery_list(&user.id).await?;

    let response = match params.format {
        Format::Text => (
            [(CONTENT_TYPE, "text/plain; charset=utf-8")],
            sufra_shopping::to_plain_text(&items),
        )
            .into_response(),
        Format::Json => Json(json!({
            "success": true,
            "groups": sufra_shopping::group_by_initial(&items),
            "groceryList": items,
        }))
        .into_response(),
    };

    Ok(response)
}
