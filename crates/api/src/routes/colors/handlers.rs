//! HTTP handlers for the shade catalog.

use crate::routes::colors::error::ColorsError;
use crate::routes::colors::interfaces::{ColorsQuery, CreateColorPayload, UpdateColorPayload};
use crate::routes::colors::service;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use common_formulator::Color;
use sqlx::PgPool;

/// List catalog shades, optionally filtered by brand, line, level, and tone
/// category.
#[utoipa::path(
    get,
    path = "/colors",
    tag = "Colors",
    params(ColorsQuery),
    responses(
        (status = 200, description = "Matching shades, ordered by level then name", body = Vec<Color>),
    )
)]
pub async fn get_colors(
    State(pool): State<PgPool>,
    Query(query): Query<ColorsQuery>,
) -> Result<Json<Vec<Color>>, ColorsError> {
    Ok(Json(service::list_colors(&pool, &query).await?))
}

/// Get one shade by id.
#[utoipa::path(
    get,
    path = "/colors/{id}",
    tag = "Colors",
    params(("id" = i32, Path, description = "Color id")),
    responses(
        (status = 200, description = "The shade", body = Color),
        (status = 404, description = "Color not found"),
    )
)]
pub async fn get_color(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> Result<Json<Color>, ColorsError> {
    Ok(Json(service::find_color(&pool, id).await?))
}

/// Add a shade to the catalog.
#[utoipa::path(
    post,
    path = "/colors",
    tag = "Colors",
    request_body = CreateColorPayload,
    responses(
        (status = 200, description = "The created shade", body = Color),
        (status = 409, description = "Code already exists in this brand and line"),
    )
)]
pub async fn create_color(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateColorPayload>,
) -> Result<Json<Color>, ColorsError> {
    Ok(Json(service::create_color(&pool, payload).await?))
}

/// Update a shade. Absent fields are left unchanged.
#[utoipa::path(
    put,
    path = "/colors/{id}",
    tag = "Colors",
    params(("id" = i32, Path, description = "Color id")),
    request_body = UpdateColorPayload,
    responses(
        (status = 200, description = "The updated shade", body = Color),
        (status = 404, description = "Color not found"),
        (status = 409, description = "Code already exists in this brand and line"),
    )
)]
pub async fn update_color(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateColorPayload>,
) -> Result<Json<Color>, ColorsError> {
    Ok(Json(service::update_color(&pool, id, payload).await?))
}

/// Remove a shade from the catalog.
#[utoipa::path(
    delete,
    path = "/colors/{id}",
    tag = "Colors",
    params(("id" = i32, Path, description = "Color id")),
    responses(
        (status = 204, description = "Color removed"),
        (status = 404, description = "Color not found"),
    )
)]
pub async fn delete_color(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ColorsError> {
    service::delete_color(&pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
