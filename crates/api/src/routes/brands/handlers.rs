//! HTTP handlers for the brand directory.

use crate::routes::brands::error::BrandsError;
use crate::routes::brands::interfaces::{CreateBrandPayload, UpdateBrandPayload};
use crate::routes::brands::service;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use common_formulator::BrandWithLines;
use sqlx::PgPool;

/// List all brands with their color lines.
#[utoipa::path(
    get,
    path = "/brands",
    tag = "Brands",
    responses(
        (status = 200, description = "All brands, ordered by name", body = Vec<BrandWithLines>),
    )
)]
pub async fn get_brands(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<BrandWithLines>>, BrandsError> {
    Ok(Json(service::list_brands(&pool).await?))
}

/// Get one brand by id.
#[utoipa::path(
    get,
    path = "/brands/{id}",
    tag = "Brands",
    params(("id" = i32, Path, description = "Brand id")),
    responses(
        (status = 200, description = "The brand with its color lines", body = BrandWithLines),
        (status = 404, description = "Brand not found"),
    )
)]
pub async fn get_brand(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> Result<Json<BrandWithLines>, BrandsError> {
    Ok(Json(service::find_brand(&pool, id).await?))
}

/// Create a brand with its color lines.
#[utoipa::path(
    post,
    path = "/brands",
    tag = "Brands",
    request_body = CreateBrandPayload,
    responses(
        (status = 200, description = "The created brand", body = BrandWithLines),
        (status = 409, description = "A brand with this name already exists"),
    )
)]
pub async fn create_brand(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateBrandPayload>,
) -> Result<Json<BrandWithLines>, BrandsError> {
    Ok(Json(service::create_brand(&pool, &payload).await?))
}

/// Update a brand. Absent fields are left unchanged.
#[utoipa::path(
    put,
    path = "/brands/{id}",
    tag = "Brands",
    params(("id" = i32, Path, description = "Brand id")),
    request_body = UpdateBrandPayload,
    responses(
        (status = 200, description = "The updated brand", body = BrandWithLines),
        (status = 404, description = "Brand not found"),
        (status = 409, description = "A brand with this name already exists"),
    )
)]
pub async fn update_brand(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBrandPayload>,
) -> Result<Json<BrandWithLines>, BrandsError> {
    Ok(Json(service::update_brand(&pool, id, &payload).await?))
}

/// Delete a brand and everything under it.
#[utoipa::path(
    delete,
    path = "/brands/{id}",
    tag = "Brands",
    params(("id" = i32, Path, description = "Brand id")),
    responses(
        (status = 204, description = "Brand removed"),
        (status = 404, description = "Brand not found"),
    )
)]
pub async fn delete_brand(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> Result<StatusCode, BrandsError> {
    service::delete_brand(&pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
