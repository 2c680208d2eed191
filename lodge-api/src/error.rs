use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use lodge_booking::{InvalidStayDates, ValidationErrors};
use lodge_store::ReservationError;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    ValidationError(ValidationErrors),
    NotFoundError(String),
    ConflictError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::ValidationError(errors) => {
                tracing::debug!(fields = errors.errors.len(), "Rejected booking request");
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "error": errors.to_string(), "fields": errors.errors }),
                )
            }
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::ConflictError(msg) => (StatusCode::CONFLICT, json!({ "error": msg })),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::ValidationError(err)
    }
}

impl From<InvalidStayDates> for AppError {
    fn from(err: InvalidStayDates) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<ReservationError> for AppError {
    fn from(err: ReservationError) -> Self {
        match err {
            ReservationError::Unavailable { .. } => AppError::ConflictError(err.to_string()),
        }
    }
}
