use crate::routes::brands::error::BrandsError;
use crate::routes::brands::interfaces::{ColorLinePayload, CreateBrandPayload, UpdateBrandPayload};
use common_formulator::{Brand, BrandWithLines, ColorLine};
use sqlx::{PgPool, Postgres, Transaction};
use std::collections::HashMap;

/// Fetches all brands with their color lines, ordered by brand name.
///
/// # Errors
///
/// Returns an error if a database query fails.
pub async fn list_brands(pool: &PgPool) -> Result<Vec<BrandWithLines>, BrandsError> {
    let brands = sqlx::query_as::<_, Brand>("SELECT * FROM brand ORDER BY name ASC")
        .fetch_all(pool)
        .await?;
    let lines = sqlx::query_as::<_, ColorLine>("SELECT * FROM color_line ORDER BY id ASC")
        .fetch_all(pool)
        .await?;

    let mut lines_by_brand: HashMap<i32, Vec<ColorLine>> = HashMap::new();
    for line in lines {
        lines_by_brand.entry(line.brand_id).or_default().push(line);
    }

    Ok(brands
        .into_iter()
        .map(|brand| BrandWithLines {
            color_lines: lines_by_brand.remove(&brand.id).unwrap_or_default(),
            brand,
        })
        .collect())
}

/// Fetches one brand with its color lines.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id, or a database error.
pub async fn find_brand(pool: &PgPool, id: i32) -> Result<BrandWithLines, BrandsError> {
    let brand = sqlx::query_as::<_, Brand>("SELECT * FROM brand WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(BrandsError::NotFound)?;
    let color_lines = lines_for_brand(pool, id).await?;
    Ok(BrandWithLines { brand, color_lines })
}

/// Creates a brand together with its color lines in one transaction.
///
/// # Errors
///
/// Returns `DuplicateName` when the brand name is already taken, or a
/// database error.
pub async fn create_brand(
    pool: &PgPool,
    payload: &CreateBrandPayload,
) -> Result<BrandWithLines, BrandsError> {
    let mut tx = pool.begin().await?;
    let brand = sqlx::query_as::<_, Brand>(
        "INSERT INTO brand (name, description, website, logo_url)
         VALUES ($1, $2, $3, $4)
         RETURNING *",
    )
    .bind(&payload.name)
    .bind(&payload.description)
    .bind(&payload.website)
    .bind(&payload.logo_url)
    .fetch_one(&mut *tx)
    .await
    .map_err(map_unique_violation)?;

    for line in &payload.color_lines {
        insert_color_line(&mut tx, brand.id, line).await?;
    }
    tx.commit().await?;

    let color_lines = lines_for_brand(pool, brand.id).await?;
    Ok(BrandWithLines { brand, color_lines })
}

/// Applies a partial update; a supplied set of color lines replaces the
/// existing ones wholesale.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id, `DuplicateName` on a name clash, or
/// a database error.
pub async fn update_brand(
    pool: &PgPool,
    id: i32,
    payload: &UpdateBrandPayload,
) -> Result<BrandWithLines, BrandsError> {
    let mut tx = pool.begin().await?;
    let brand = sqlx::query_as::<_, Brand>(
        "UPDATE brand
         SET name        = COALESCE($2, name),
             description = COALESCE($3, description),
             website     = COALESCE($4, website),
             logo_url    = COALESCE($5, logo_url),
             updated_at  = NOW()
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(&payload.name)
    .bind(&payload.description)
    .bind(&payload.website)
    .bind(&payload.logo_url)
    .fetch_optional(&mut *tx)
    .await
    .map_err(map_unique_violation)?
    .ok_or(BrandsError::NotFound)?;

    if let Some(lines) = &payload.color_lines {
        sqlx::query("DELETE FROM color_line WHERE brand_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        for line in lines {
            insert_color_line(&mut tx, id, line).await?;
        }
    }
    tx.commit().await?;

    let color_lines = lines_for_brand(pool, id).await?;
    Ok(BrandWithLines { brand, color_lines })
}

/// Deletes a brand; its color lines and shades cascade.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id, or a database error.
pub async fn delete_brand(pool: &PgPool, id: i32) -> Result<(), BrandsError> {
    let result = sqlx::query("DELETE FROM brand WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(BrandsError::NotFound);
    }
    Ok(())
}

async fn lines_for_brand(pool: &PgPool, brand_id: i32) -> Result<Vec<ColorLine>, sqlx::Error> {
    sqlx::query_as::<_, ColorLine>("SELECT * FROM color_line WHERE brand_id = $1 ORDER BY id ASC")
        .bind(brand_id)
        .fetch_all(pool)
        .await
}

async fn insert_color_line(
    tx: &mut Transaction<'_, Postgres>,
    brand_id: i32,
    line: &ColorLinePayload,
) -> Result<(), BrandsError> {
    sqlx::query(
        "INSERT INTO color_line (brand_id, name, description, is_permanent, is_demi_permanent,
                                 is_semi_permanent, is_high_lift, developer_options, mixing_ratio)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
    )
    .bind(brand_id)
    .bind(&line.name)
    .bind(&line.description)
    .bind(line.is_permanent)
    .bind(line.is_demi_permanent)
    .bind(line.is_semi_permanent)
    .bind(line.is_high_lift)
    .bind(&line.developer_options)
    .bind(&line.mixing_ratio)
    .execute(&mut **tx)
    .await
    .map_err(map_unique_violation)?;
    Ok(())
}

fn map_unique_violation(error: sqlx::Error) -> BrandsError {
    if error
        .as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
    {
        BrandsError::DuplicateName
    } else {
        BrandsError::Database(error)
    }
}
