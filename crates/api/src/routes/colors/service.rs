use crate::routes::colors::error::ColorsError;
use crate::routes::colors::interfaces::{ColorsQuery, CreateColorPayload, UpdateColorPayload};
use common_formulator::{Color, ColorAttributes};
use sqlx::types::Json;
use sqlx::PgPool;

/// Default intensity applied when a shade is created without attributes.
fn default_attributes() -> ColorAttributes {
    ColorAttributes {
        intensity: Some(5),
        reflective: false,
        opaque: false,
    }
}

/// Fetches catalog shades matching the given filters, ordered by level then
/// name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn list_colors(pool: &PgPool, query: &ColorsQuery) -> Result<Vec<Color>, ColorsError> {
    let colors = sqlx::query_as::<_, Color>(
        "SELECT * FROM color
         WHERE ($1::INT4 IS NULL OR brand_id = $1)
           AND ($2::TEXT IS NULL OR color_line = $2)
           AND ($3::INT4 IS NULL OR level = $3)
           AND ($4::tone_category IS NULL OR tone_category = $4)
         ORDER BY level ASC, name ASC",
    )
    .bind(query.brand_id)
    .bind(&query.color_line)
    .bind(query.level)
    .bind(query.tone_category)
    .fetch_all(pool)
    .await?;
    Ok(colors)
}

/// Fetches one shade by id.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id, or a database error.
pub async fn find_color(pool: &PgPool, id: i32) -> Result<Color, ColorsError> {
    sqlx::query_as::<_, Color>("SELECT * FROM color WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(ColorsError::NotFound)
}

/// Creates a shade, applying the catalog defaults for absent fields.
///
/// # Errors
///
/// Returns `DuplicateCode` when the code is already taken within the brand
/// and line, or a database error.
pub async fn create_color(
    pool: &PgPool,
    payload: CreateColorPayload,
) -> Result<Color, ColorsError> {
    let hex_color = payload.hex_color.unwrap_or_else(|| "#000000".to_string());
    let attributes = payload.color_attributes.unwrap_or_else(default_attributes);

    sqlx::query_as::<_, Color>(
        "INSERT INTO color (brand_id, color_line, name, code, level, tone, tone_category,
                            hex_color, is_high_lift, is_corrective, corrective_properties,
                            best_used_for, color_attributes, special_instructions, image_url)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
         RETURNING *",
    )
    .bind(payload.brand_id)
    .bind(&payload.color_line)
    .bind(&payload.name)
    .bind(&payload.code)
    .bind(payload.level)
    .bind(&payload.tone)
    .bind(payload.tone_category)
    .bind(hex_color)
    .bind(payload.is_high_lift)
    .bind(payload.is_corrective)
    .bind(payload.corrective_properties)
    .bind(&payload.best_used_for)
    .bind(Json(attributes))
    .bind(&payload.special_instructions)
    .bind(&payload.image_url)
    .fetch_one(pool)
    .await
    .map_err(map_unique_violation)
}

/// Applies a partial update to a shade.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id, `DuplicateCode` on a code clash, or
/// a database error.
pub async fn update_color(
    pool: &PgPool,
    id: i32,
    payload: UpdateColorPayload,
) -> Result<Color, ColorsError> {
    let attributes = payload.color_attributes.map(Json);
    sqlx::query_as::<_, Color>(
        "UPDATE color
         SET color_line            = COALESCE($2, color_line),
             name                  = COALESCE($3, name),
             code                  = COALESCE($4, code),
             level                 = COALESCE($5::INT4, level),
             tone                  = COALESCE($6, tone),
             tone_category         = COALESCE($7::tone_category, tone_category),
             hex_color             = COALESCE($8, hex_color),
             is_high_lift          = COALESCE($9::BOOL, is_high_lift),
             is_corrective         = COALESCE($10::BOOL, is_corrective),
             corrective_properties = COALESCE($11::corrective_properties, corrective_properties),
             best_used_for         = COALESCE($12::TEXT[], best_used_for),
             color_attributes      = COALESCE($13::JSONB, color_attributes),
             special_instructions  = COALESCE($14, special_instructions),
             image_url             = COALESCE($15, image_url),
             updated_at            = NOW()
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(&payload.color_line)
    .bind(&payload.name)
    .bind(&payload.code)
    .bind(payload.level)
    .bind(&payload.tone)
    .bind(payload.tone_category)
    .bind(&payload.hex_color)
    .bind(payload.is_high_lift)
    .bind(payload.is_corrective)
    .bind(payload.corrective_properties)
    .bind(&payload.best_used_for)
    .bind(attributes)
    .bind(&payload.special_instructions)
    .bind(&payload.image_url)
    .fetch_optional(pool)
    .await
    .map_err(map_unique_violation)?
    .ok_or(ColorsError::NotFound)
}

/// Deletes a shade.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id, or a database error.
pub async fn delete_color(pool: &PgPool, id: i32) -> Result<(), ColorsError> {
    let result = sqlx::query("DELETE FROM color WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(ColorsError::NotFound);
    }
    Ok(())
}

fn map_unique_violation(error: sqlx::Error) -> ColorsError {
    if error
        .as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
    {
        ColorsError::DuplicateCode
    } else {
        ColorsError::Database(error)
    }
}
