//! The product catalog seam.
//!
//! The engine only ever reads from the catalog. Implementations back this
//! with a database; tests use an in-memory fake.

use async_trait::async_trait;
use common_formulator::{BrandWithLines, Color, ToneCategory};

/// Read-only access to the product catalog and brand directory.
///
/// The result ordering is part of the contract: the engine takes the first
/// match, so implementations must order as documented or selection becomes
/// nondeterministic across stores.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Shades in a brand's line at an exact level and tone category, ordered
    /// by name ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store read fails.
    async fn find_colors(
        &self,
        brand_id: i32,
        color_line: &str,
        level: i32,
        tone_category: ToneCategory,
    ) -> color_eyre::Result<Vec<Color>>;

    /// Corrective shades in a brand's line for a tone category, ordered by
    /// level descending.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store read fails.
    async fn find_corrective_colors(
        &self,
        brand_id: i32,
        color_line: &str,
        tone_category: ToneCategory,
    ) -> color_eyre::Result<Vec<Color>>;

    /// A brand with its color lines, or `None` when the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store read fails.
    async fn get_brand(&self, brand_id: i32) -> color_eyre::Result<Option<BrandWithLines>>;
}
