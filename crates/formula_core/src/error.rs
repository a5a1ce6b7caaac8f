use common_formulator::ToneCategory;
use thiserror::Error;

/// Failures a formula calculation can surface.
///
/// The internal resolvers cannot fail; only the catalog-dependent steps can,
/// and only a missing primary color is fatal to the calculation. A missing
/// corrective color degrades the formula instead.
#[derive(Debug, Error)]
pub enum FormulaError {
    /// No shade in the catalog matches the requested brand, line, level, and
    /// tone. No substitute is ever picked for the primary color.
    #[error("No primary colors found for level {level} with tone {tone}")]
    PrimaryColorNotFound { level: i32, tone: ToneCategory },

    /// The brand directory has no entry for the requested brand.
    #[error("Brand {0} not found")]
    BrandNotFound(i32),

    /// Catalog or brand directory read failure, propagated unchanged.
    #[error(transparent)]
    Catalog(#[from] color_eyre::Report),
}
