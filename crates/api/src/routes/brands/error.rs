use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum BrandsError {
    #[error("Brand not found")]
    NotFound,

    #[error("A brand with this name already exists")]
    DuplicateName,

    #[error("database error")]
    Database(#[from] sqlx::Error),
}

fn log_error(error: &BrandsError) {
    match error {
        BrandsError::NotFound => info!("Brand lookup missed."),
        BrandsError::DuplicateName => info!("Brand create/update hit a duplicate name."),
        BrandsError::Database(e) => error!("Database query failed: {}", e),
    }
}

impl IntoResponse for BrandsError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, error_message) = match self {
            Self::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            Self::DuplicateName => (StatusCode::CONFLICT, self.to_string()),
            Self::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "A database error occurred.".to_string(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
