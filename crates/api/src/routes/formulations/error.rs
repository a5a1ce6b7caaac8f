use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use formula_core::FormulaError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum FormulationsError {
    #[error("{0}")]
    Validation(String),

    #[error("Formulation not found")]
    NotFound,

    #[error(transparent)]
    Formula(#[from] FormulaError),

    #[error("database error")]
    Database(#[from] sqlx::Error),
}

fn log_error(error: &FormulationsError) {
    match error {
        FormulationsError::Validation(message) => {
            info!("Rejected formulation request: {}", message);
        }
        FormulationsError::NotFound => info!("Formulation lookup missed."),
        FormulationsError::Formula(FormulaError::Catalog(e)) => {
            error!("Catalog read failed during calculation: {:?}", e);
        }
        FormulationsError::Formula(e) => warn!("Calculation failed: {}", e),
        FormulationsError::Database(e) => error!("Database query failed: {}", e),
    }
}

impl IntoResponse for FormulationsError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, error_message) = match self {
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message),
            Self::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            // The engine's message names the missing level and tone; it is
            // surfaced verbatim, with no substitute color picked.
            Self::Formula(
                error @ (FormulaError::PrimaryColorNotFound { .. } | FormulaError::BrandNotFound(_)),
            ) => (StatusCode::NOT_FOUND, error.to_string()),
            Self::Formula(FormulaError::Catalog(_)) | Self::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "A database error occurred.".to_string(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
