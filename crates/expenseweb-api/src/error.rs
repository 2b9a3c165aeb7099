//! Error types for expenseweb-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use expenseweb_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Upstream request failed: {message}")]
    Upstream { message: String },

    #[error("Internal server error")]
    InternalError,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            ApiError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::ExpenseNotFound { id } => ApiError::NotFound {
                resource: format!("expense {}", id),
            },
            CoreError::ValidationError { message } => ApiError::BadRequest { message },
            e if e.is_request_failure() => ApiError::Upstream { message: e.to_string() },
            e => {
                log::error!("Unexpected core error: {}", e);
                ApiError::InternalError
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = format!(
            r#"<div class='bg-red-50 border border-red-200 rounded-lg p-4'><p class='text-sm text-red-600'>{}</p></div>"#,
            expenseweb_utils::escape_html(&self.to_string())
        );
        (self.status(), axum::response::Html(body)).into_response()
    }
}
