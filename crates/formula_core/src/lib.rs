//! Hair color formula engine.
//!
//! Derives physical hair facts from the requested level change (underlying
//! pigment, ash requirement, developer strength), resolves a corrective tone,
//! queries the product catalog for matching shades, and assembles a complete
//! formula with quantities, processing time, and application instructions.
//!
//! The engine is a stateless pure computation per invocation; the only
//! external collaborator is the read-only [`Catalog`].

pub mod catalog;
pub mod engine;
pub mod error;
pub mod levels;
pub mod mixing;

pub use catalog::Catalog;
pub use engine::{
    calculate_formula, ColorPortion, CorrectivePortion, DeveloperPortion, Formula, FormulaRequest,
    FormulaResult,
};
pub use error::FormulaError;
pub use levels::UnderlyingPigment;
