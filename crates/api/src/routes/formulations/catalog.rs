//! Postgres-backed implementation of the formula engine's catalog seam.

use async_trait::async_trait;
use common_formulator::{Brand, BrandWithLines, Color, ColorLine, ToneCategory};
use formula_core::Catalog;
use sqlx::PgPool;

/// Read-only catalog view over the shared connection pool. The engine never
/// writes through this.
pub struct PgCatalog<'a> {
    pub pool: &'a PgPool,
}

#[async_trait]
impl Catalog for PgCatalog<'_> {
    async fn find_colors(
        &self,
        brand_id: i32,
        color_line: &str,
        level: i32,
        tone_category: ToneCategory,
    ) -> color_eyre::Result<Vec<Color>> {
        let colors = sqlx::query_as::<_, Color>(
            "SELECT * FROM color
             WHERE brand_id = $1 AND color_line = $2 AND level = $3 AND tone_category = $4
             ORDER BY name ASC",
        )
        .bind(brand_id)
        .bind(color_line)
        .bind(level)
        .bind(tone_category)
        .fetch_all(self.pool)
        .await?;
        Ok(colors)
    }

    async fn find_corrective_colors(
        &self,
        brand_id: i32,
        color_line: &str,
        tone_category: ToneCategory,
    ) -> color_eyre::Result<Vec<Color>> {
        let colors = sqlx::query_as::<_, Color>(
            "SELECT * FROM color
             WHERE brand_id = $1 AND color_line = $2 AND tone_category = $3 AND is_corrective
             ORDER BY level DESC",
        )
        .bind(brand_id)
        .bind(color_line)
        .bind(tone_category)
        .fetch_all(self.pool)
        .await?;
        Ok(colors)
    }

    async fn get_brand(&self, brand_id: i32) -> color_eyre::Result<Option<BrandWithLines>> {
        let brand = sqlx::query_as::<_, Brand>("SELECT * FROM brand WHERE id = $1")
            .bind(brand_id)
            .fetch_optional(self.pool)
            .await?;
        let Some(brand) = brand else {
            return Ok(None);
        };
        let color_lines = sqlx::query_as::<_, ColorLine>(
            "SELECT * FROM color_line WHERE brand_id = $1 ORDER BY id ASC",
        )
        .bind(brand_id)
        .fetch_all(self.pool)
        .await?;
        Ok(Some(BrandWithLines { brand, color_lines }))
    }
}
