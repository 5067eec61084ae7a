use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

/// Unified error type that renders as a JSON `{"error": "..."}` response
/// with an appropriate HTTP status code.
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<pricebook_sdk::PricebookError> for AppError {
    fn from(e: pricebook_sdk::PricebookError) -> Self {
        match &e {
            pricebook_sdk::PricebookError::NotFound(msg) => AppError::not_found(msg.clone()),
            pricebook_sdk::PricebookError::InvalidArgument(msg) => {
                AppError::bad_request(msg.clone())
            }
            _ => AppError::internal(e.to_string()),
        }
    }
}
