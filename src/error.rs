use axum::{
    Json,
    extract::{FromRequest, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub const MISSING_FIELDS: &str = "Please provide all required fields";
pub const SERVER_ERROR: &str = "Server error";

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] sufra_shared::Error),

    #[error("{0}")]
    Unauthorized(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("Invalid payload: {0}")]
    Payload(#[from] JsonRejection),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Error body. Also stored in the response extensions so the localization
/// middleware can rewrite the message.
#[derive(Serialize, Clone, Debug)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: vec![],
        }
    }
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        use sufra_shared::Error;

        match self {
            AppError::Domain(Error::Validate(errors)) => {
                let mut fields: Vec<String> = errors.errors().keys().map(|k| k.to_string()).collect();
                fields.sort();

                (
                    StatusCode::BAD_REQUEST,
                    ErrorBody {
                        errors: fields,
                        ..ErrorBody::new(MISSING_FIELDS)
                    },
                )
            }
            AppError::Domain(Error::User(message)) => {
                (StatusCode::BAD_REQUEST, ErrorBody::new(message))
            }
            AppError::Domain(Error::Unauthorized(message)) => {
                (StatusCode::UNAUTHORIZED, ErrorBody::new(message))
            }
            AppError::Domain(Error::NotFound(message)) => {
                (StatusCode::NOT_FOUND, ErrorBody::new(message))
            }
            AppError::Domain(Error::Forbidden) => {
                (StatusCode::FORBIDDEN, ErrorBody::new("Forbidden"))
            }
            AppError::Domain(Error::Server(message)) => {
                tracing::error!(error = %message, "server error");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::new(SERVER_ERROR))
            }
            AppError::Domain(Error::Unknown(err)) | AppError::Internal(err) => {
                tracing::error!(error = ?err, "unexpected error");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::new(SERVER_ERROR))
            }
            AppError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, ErrorBody::new(message)),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, ErrorBody::new(message)),
            AppError::Payload(rejection) => {
                tracing::debug!(error = %rejection, "rejected payload");
                (StatusCode::BAD_REQUEST, ErrorBody::new(MISSING_FIELDS))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        let mut response = (status, Json(body.clone())).into_response();
        response.extensions_mut().insert(body);
        response
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// `axum::Json` whose rejection answers like every other API error.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
