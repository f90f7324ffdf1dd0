//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("config: {0}")]
    Config(String),
    #[error("{0}")]
    Validation(String),
    #[error("{kind} with id {id} not found")]
    NotFound { kind: &'static str, id: i64 },
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn product_not_found(id: i64) -> Self {
        AppError::NotFound { kind: "product", id }
    }

    pub fn user_not_found(id: i64) -> Self {
        AppError::NotFound { kind: "user", id }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Deliberately coarse: binding/validation problems are the caller's
        // fault (400); everything downstream, not-found included, is a 500.
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::NotFound { .. } | AppError::Db(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ApiResponse::<()>::failure(self.to_string());
        (status, Json(body)).into_response()
    }
}
