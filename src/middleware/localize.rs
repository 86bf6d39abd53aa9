use axum::{
    Json,
    extract::Request,
    http::header::CONTENT_LENGTH,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{error::ErrorBody, language::Language};

/// Rewrites error bodies in the language negotiated from `Accept-Language`.
pub async fn localize_errors(language: Language, request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let Some(body) = response.extensions_mut().remove::<ErrorBody>() else {
        return response;
    };

    if language == Language::En {
        return response;
    }

    let body = ErrorBody {
        message: language.translate(&body.message),
        ..body
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(CONTENT_LENGTH);

    (parts, Json(body)).into_response()
}
