use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use roster_core::AppError;

use crate::dto::{ErrorResponse, INTERNAL_SERVER_ERROR, UNAUTHORIZED};

/// Wrapper so we can implement `IntoResponse` for `AppError`.
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            AppError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(message)).into_response()
            }
            err @ AppError::NotFound(_) => {
                (StatusCode::NOT_FOUND, Json(err.to_string())).into_response()
            }
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new(UNAUTHORIZED)),
            )
                .into_response(),
            err @ (AppError::Config(_) | AppError::Internal(_)) => {
                tracing::error!(error = %err, "Unhandled error while serving request");
                internal_error()
            }
        }
    }
}

/// `500 {"error": "Internal server error."}`. Never carries the underlying cause.
pub fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(INTERNAL_SERVER_ERROR)),
    )
        .into_response()
}
