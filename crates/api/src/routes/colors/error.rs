use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ColorsError {
    #[error("Color not found")]
    NotFound,

    #[error("A color with this code already exists in the line")]
    DuplicateCode,

    #[error("database error")]
    Database(#[from] sqlx::Error),
}

fn log_error(error: &ColorsError) {
    match error {
        ColorsError::NotFound => info!("Color lookup missed."),
        ColorsError::DuplicateCode => info!("Color create/update hit a duplicate code."),
        ColorsError::Database(e) => error!("Database query failed: {}", e),
    }
}

impl IntoResponse for ColorsError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, error_message) = match self {
            Self::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            Self::DuplicateCode => (StatusCode::CONFLICT, self.to_string()),
            Self::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "A database error occurred.".to_string(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
