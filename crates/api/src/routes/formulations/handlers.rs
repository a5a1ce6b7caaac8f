//! HTTP handlers for formula calculation and the formulation history.

use crate::routes::formulations::error::FormulationsError;
use crate::routes::formulations::interfaces::{CalculateFormulationPayload, FormulationDto};
use crate::routes::formulations::service;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sqlx::PgPool;

/// List all stored formulations, newest first.
#[utoipa::path(
    get,
    path = "/formulations",
    tag = "Formulations",
    responses(
        (status = 200, description = "All formulations with references resolved", body = Vec<FormulationDto>),
    )
)]
pub async fn get_formulations(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<FormulationDto>>, FormulationsError> {
    Ok(Json(service::list_formulations(&pool).await?))
}

/// Get one stored formulation by id.
#[utoipa::path(
    get,
    path = "/formulations/{id}",
    tag = "Formulations",
    params(("id" = i32, Path, description = "Formulation id")),
    responses(
        (status = 200, description = "The formulation", body = FormulationDto),
        (status = 404, description = "Formulation not found"),
    )
)]
pub async fn get_formulation(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> Result<Json<FormulationDto>, FormulationsError> {
    Ok(Json(service::find_formulation(&pool, id).await?))
}

/// Calculate a dye formula for a level/tone transition and store it.
#[utoipa::path(
    post,
    path = "/formulations/calculate",
    tag = "Formulations",
    request_body = CalculateFormulationPayload,
    responses(
        (status = 200, description = "The computed and stored formulation", body = FormulationDto),
        (status = 400, description = "Input missing or out of range"),
        (status = 404, description = "No primary color matches the requested level and tone"),
    )
)]
pub async fn calculate_formulation(
    State(pool): State<PgPool>,
    Json(payload): Json<CalculateFormulationPayload>,
) -> Result<Json<FormulationDto>, FormulationsError> {
    Ok(Json(service::calculate_and_store(&pool, &payload).await?))
}

/// Delete a stored formulation.
#[utoipa::path(
    delete,
    path = "/formulations/{id}",
    tag = "Formulations",
    params(("id" = i32, Path, description = "Formulation id")),
    responses(
        (status = 204, description = "Formulation removed"),
        (status = 404, description = "Formulation not found"),
    )
)]
pub async fn delete_formulation(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> Result<StatusCode, FormulationsError> {
    service::delete_formulation(&pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
