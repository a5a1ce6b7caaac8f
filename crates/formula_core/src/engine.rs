//! Formula calculation: the one entry point the HTTP layer consumes.

use crate::catalog::Catalog;
use crate::error::FormulaError;
use crate::levels::{
    ash_percentage, corrective_tone, developer_volume, underlying_pigment, UnderlyingPigment,
};
use crate::mixing::{
    developer_multiplier, processing_time, round2, special_instructions, TOTAL_COLOR_OZ, UNIT,
};
use common_formulator::{Color, ToneCategory};
use serde::Serialize;
use tracing::warn;

/// Input to a formula calculation. Levels are expected to be validated to
/// 1-10 at the API boundary before the engine runs.
#[derive(Debug, Clone)]
pub struct FormulaRequest {
    pub starting_level: i32,
    pub starting_tone: ToneCategory,
    pub desired_level: i32,
    pub desired_tone: ToneCategory,
    pub brand_id: i32,
    pub color_line: String,
}

/// The primary color portion of a formula.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPortion {
    pub color: Color,
    pub amount: f64,
    pub unit: &'static str,
}

/// A corrective color portion, with the undertone it is there to neutralize.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectivePortion {
    pub color: Color,
    pub amount: f64,
    pub unit: &'static str,
    pub purpose: String,
}

/// The developer portion of a formula.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperPortion {
    pub volume: i32,
    pub amount: f64,
    pub unit: &'static str,
}

/// The mixed product amounts of a computed formula.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Formula {
    pub primary_color: ColorPortion,
    pub corrective_colors: Vec<CorrectivePortion>,
    pub developer: DeveloperPortion,
}

/// A complete calculation result, including the derived hair facts the
/// stylist sees alongside the formula.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulaResult {
    pub formula: Formula,
    pub processing_time: i32,
    pub special_instructions: String,
    pub for_lifting: bool,
    pub for_depositing: bool,
    pub level_difference: i32,
    pub underlying_pigment: UnderlyingPigment,
    pub percentage_of_ash: i32,
}

/// Calculate the hair color formula for a level/tone transition.
///
/// Derives pigment, ash, and developer facts from the level delta, picks the
/// primary shade at the desired level and tone, adds at most one corrective
/// shade when lifting (falling back to the ash family once before going
/// without), and assembles amounts from a fixed 2 oz of color plus the line's
/// mixing ratio.
///
/// # Errors
///
/// * [`FormulaError::PrimaryColorNotFound`] when no shade matches the desired
///   level and tone in the chosen line.
/// * [`FormulaError::BrandNotFound`] when the brand directory has no entry
///   for the requested brand.
/// * [`FormulaError::Catalog`] when a catalog read fails.
pub async fn calculate_formula<C>(
    catalog: &C,
    request: &FormulaRequest,
) -> Result<FormulaResult, FormulaError>
where
    C: Catalog + ?Sized,
{
    // Positive difference means lifting, zero or negative means depositing.
    let level_difference = request.desired_level - request.starting_level;
    let for_lifting = level_difference > 0;
    let for_depositing = level_difference <= 0;

    let pigment = underlying_pigment(request.starting_level);
    let percentage_of_ash = if for_lifting {
        ash_percentage(level_difference)
    } else {
        0
    };
    let volume = developer_volume(level_difference, request.starting_level);

    let primary_colors = catalog
        .find_colors(
            request.brand_id,
            &request.color_line,
            request.desired_level,
            request.desired_tone,
        )
        .await?;
    let Some(primary_color) = primary_colors.into_iter().next() else {
        return Err(FormulaError::PrimaryColorNotFound {
            level: request.desired_level,
            tone: request.desired_tone,
        });
    };

    // Deposit-only formulas carry no corrective tone at all.
    let corrective_color = if for_lifting {
        let tone = corrective_tone(pigment);
        let mut found = catalog
            .find_corrective_colors(request.brand_id, &request.color_line, tone)
            .await?;
        if found.is_empty() {
            // One retry with the ash family, then the formula proceeds
            // without correction.
            found = catalog
                .find_corrective_colors(request.brand_id, &request.color_line, ToneCategory::Ash)
                .await?;
        }
        found.into_iter().next()
    } else {
        None
    };

    let mut primary_amount = TOTAL_COLOR_OZ;
    let mut corrective_amount = 0.0;
    if for_lifting && corrective_color.is_some() {
        corrective_amount = TOTAL_COLOR_OZ * f64::from(percentage_of_ash) / 100.0;
        primary_amount = TOTAL_COLOR_OZ - corrective_amount;
    }

    let brand = catalog
        .get_brand(request.brand_id)
        .await?
        .ok_or(FormulaError::BrandNotFound(request.brand_id))?;
    let mixing_ratio = brand
        .color_lines
        .iter()
        .find(|line| line.name == request.color_line)
        .map_or("1:1", |line| line.mixing_ratio.as_str());
    let multiplier = developer_multiplier(mixing_ratio).unwrap_or_else(|| {
        warn!("Unparseable mixing ratio '{mixing_ratio}', assuming 1:1");
        1.0
    });
    let developer_amount = TOTAL_COLOR_OZ * multiplier;

    let corrective_colors = corrective_color
        .map(|color| CorrectivePortion {
            amount: round2(corrective_amount),
            unit: UNIT,
            purpose: format!("Neutralize {pigment} undertones"),
            color,
        })
        .into_iter()
        .collect();

    Ok(FormulaResult {
        formula: Formula {
            primary_color: ColorPortion {
                color: primary_color,
                amount: round2(primary_amount),
                unit: UNIT,
            },
            corrective_colors,
            developer: DeveloperPortion {
                volume,
                amount: round2(developer_amount),
                unit: UNIT,
            },
        },
        processing_time: processing_time(volume),
        special_instructions: special_instructions(for_lifting, level_difference),
        for_lifting,
        for_depositing,
        level_difference,
        underlying_pigment: pigment,
        percentage_of_ash,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use common_formulator::{Brand, BrandWithLines, ColorLine, CorrectiveProperties};

    const BRAND_ID: i32 = 7;
    const LINE: &str = "Full Spectrum";

    struct FakeCatalog {
        colors: Vec<Color>,
        brands: Vec<BrandWithLines>,
    }

    #[async_trait]
    impl Catalog for FakeCatalog {
        async fn find_colors(
            &self,
            brand_id: i32,
            color_line: &str,
            level: i32,
            tone_category: ToneCategory,
        ) -> color_eyre::Result<Vec<Color>> {
            let mut matches: Vec<Color> = self
                .colors
                .iter()
                .filter(|c| {
                    c.brand_id == brand_id
                        && c.color_line == color_line
                        && c.level == level
                        && c.tone_category == tone_category
                })
                .cloned()
                .collect();
            matches.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(matches)
        }

        async fn find_corrective_colors(
            &self,
            brand_id: i32,
            color_line: &str,
            tone_category: ToneCategory,
        ) -> color_eyre::Result<Vec<Color>> {
            let mut matches: Vec<Color> = self
                .colors
                .iter()
                .filter(|c| {
                    c.brand_id == brand_id
                        && c.color_line == color_line
                        && c.tone_category == tone_category
                        && c.is_corrective
                })
                .cloned()
                .collect();
            matches.sort_by(|a, b| b.level.cmp(&a.level));
            Ok(matches)
        }

        async fn get_brand(&self, brand_id: i32) -> color_eyre::Result<Option<BrandWithLines>> {
            Ok(self
                .brands
                .iter()
                .find(|b| b.brand.id == brand_id)
                .cloned())
        }
    }

    fn shade(
        id: i32,
        name: &str,
        code: &str,
        level: i32,
        tone_category: ToneCategory,
        is_corrective: bool,
    ) -> Color {
        Color {
            id,
            brand_id: BRAND_ID,
            color_line: LINE.to_string(),
            name: name.to_string(),
            code: code.to_string(),
            level,
            tone: code.chars().filter(char::is_ascii_alphabetic).collect(),
            tone_category,
            hex_color: None,
            is_high_lift: false,
            is_corrective,
            corrective_properties: CorrectiveProperties::None,
            best_used_for: vec![],
            color_attributes: None,
            special_instructions: None,
            image_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn brand_with_ratio(mixing_ratio: &str) -> BrandWithLines {
        BrandWithLines {
            brand: Brand {
                id: BRAND_ID,
                name: "Aveda".to_string(),
                description: "Plant-based color".to_string(),
                website: "https://www.aveda.com".to_string(),
                logo_url: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            color_lines: vec![ColorLine {
                id: 1,
                brand_id: BRAND_ID,
                name: LINE.to_string(),
                description: None,
                is_permanent: true,
                is_demi_permanent: false,
                is_semi_permanent: false,
                is_high_lift: false,
                developer_options: vec![10, 20, 30, 40],
                mixing_ratio: mixing_ratio.to_string(),
            }],
        }
    }

    fn request(starting_level: i32, desired_level: i32, desired_tone: ToneCategory) -> FormulaRequest {
        FormulaRequest {
            starting_level,
            starting_tone: ToneCategory::Natural,
            desired_level,
            desired_tone,
            brand_id: BRAND_ID,
            color_line: LINE.to_string(),
        }
    }

    #[tokio::test]
    async fn two_level_lift_splits_color_by_ash_percentage() {
        // Lifting 6 -> 8 exposes red-orange, wanting a blue corrective; the
        // catalog only stocks an ash corrective, so the fallback family is
        // used.
        let catalog = FakeCatalog {
            colors: vec![
                shade(1, "Ash Light Blonde", "8A", 8, ToneCategory::Ash, false),
                shade(2, "Ash Dark Blonde", "7A", 7, ToneCategory::Ash, true),
            ],
            brands: vec![brand_with_ratio("1:1")],
        };

        let result = calculate_formula(&catalog, &request(6, 8, ToneCategory::Ash))
            .await
            .unwrap();

        assert!(result.for_lifting);
        assert!(!result.for_depositing);
        assert_eq!(result.level_difference, 2);
        assert_eq!(result.underlying_pigment, UnderlyingPigment::RedOrange);
        assert_eq!(result.percentage_of_ash, 30);

        assert_eq!(result.formula.primary_color.color.id, 1);
        assert_eq!(result.formula.primary_color.amount, 1.4);
        assert_eq!(result.formula.primary_color.unit, "oz");

        assert_eq!(result.formula.corrective_colors.len(), 1);
        let corrective = &result.formula.corrective_colors[0];
        assert_eq!(corrective.color.id, 2);
        assert_eq!(corrective.amount, 0.6);
        assert_eq!(corrective.purpose, "Neutralize Red-orange undertones");

        assert_eq!(result.formula.developer.volume, 20);
        assert_eq!(result.formula.developer.amount, 2.0);
        assert_eq!(result.processing_time, 30);
        assert!(result
            .special_instructions
            .starts_with("Apply to mid-lengths and ends first"));
    }

    #[tokio::test]
    async fn deposit_only_uses_all_color_for_primary() {
        let catalog = FakeCatalog {
            colors: vec![
                shade(1, "Violet Light Brown", "6V", 6, ToneCategory::Violet, false),
                shade(2, "Green Corrector", "GR", 0, ToneCategory::Green, true),
            ],
            brands: vec![brand_with_ratio("1:1")],
        };

        let result = calculate_formula(&catalog, &request(7, 6, ToneCategory::Violet))
            .await
            .unwrap();

        assert!(!result.for_lifting);
        assert!(result.for_depositing);
        assert_eq!(result.level_difference, -1);
        assert_eq!(result.percentage_of_ash, 0);
        assert!(result.formula.corrective_colors.is_empty());
        assert_eq!(result.formula.primary_color.amount, 2.0);
        assert_eq!(result.formula.developer.volume, 10);
        assert_eq!(result.processing_time, 25);
        assert_eq!(
            result.special_instructions,
            "Apply evenly from roots to ends. For more vibrancy, leave on for full processing time."
        );
    }

    #[tokio::test]
    async fn missing_primary_color_is_fatal() {
        let catalog = FakeCatalog {
            colors: vec![shade(1, "Natural Blonde", "8N", 8, ToneCategory::Natural, false)],
            brands: vec![brand_with_ratio("1:1")],
        };

        let error = calculate_formula(&catalog, &request(6, 8, ToneCategory::Ash))
            .await
            .unwrap_err();

        match error {
            FormulaError::PrimaryColorNotFound { level, tone } => {
                assert_eq!(level, 8);
                assert_eq!(tone, ToneCategory::Ash);
            }
            other => panic!("expected PrimaryColorNotFound, got {other:?}"),
        }
        assert_eq!(
            error.to_string(),
            "No primary colors found for level 8 with tone ash"
        );
    }

    #[tokio::test]
    async fn specific_corrective_tone_wins_over_fallback() {
        // Lifting 3 -> 5 exposes red-brown, so the green corrector is picked
        // directly without touching the ash family.
        let catalog = FakeCatalog {
            colors: vec![
                shade(1, "Red Light Brown", "5R", 5, ToneCategory::Red, false),
                shade(2, "Green Corrector", "GR", 0, ToneCategory::Green, true),
                shade(3, "Ash Medium Brown", "5A", 5, ToneCategory::Ash, true),
            ],
            brands: vec![brand_with_ratio("1:1")],
        };

        let result = calculate_formula(&catalog, &request(3, 5, ToneCategory::Red))
            .await
            .unwrap();

        assert_eq!(result.underlying_pigment, UnderlyingPigment::RedBrown);
        assert_eq!(result.formula.corrective_colors[0].color.id, 2);
        assert_eq!(
            result.formula.corrective_colors[0].purpose,
            "Neutralize Red-brown undertones"
        );
        // 2 levels of lift from a dark starting point.
        assert_eq!(result.formula.developer.volume, 30);
        assert_eq!(result.processing_time, 35);
    }

    #[tokio::test]
    async fn no_corrective_anywhere_degrades_gracefully() {
        let catalog = FakeCatalog {
            colors: vec![shade(1, "Ash Light Blonde", "8A", 8, ToneCategory::Ash, false)],
            brands: vec![brand_with_ratio("1:1")],
        };

        let result = calculate_formula(&catalog, &request(6, 8, ToneCategory::Ash))
            .await
            .unwrap();

        assert!(result.for_lifting);
        assert!(result.formula.corrective_colors.is_empty());
        // Without a corrective, the full 2 oz goes to the primary shade.
        assert_eq!(result.formula.primary_color.amount, 2.0);
        assert_eq!(result.percentage_of_ash, 30);
    }

    #[tokio::test]
    async fn primary_selection_is_first_by_name() {
        // Insertion order is reversed alphabetically; selection must not
        // depend on it.
        let catalog = FakeCatalog {
            colors: vec![
                shade(1, "Smoky Ash Blonde", "8SA", 8, ToneCategory::Ash, false),
                shade(2, "Cool Ash Blonde", "8CA", 8, ToneCategory::Ash, false),
            ],
            brands: vec![brand_with_ratio("1:1")],
        };

        let result = calculate_formula(&catalog, &request(6, 8, ToneCategory::Ash))
            .await
            .unwrap();

        assert_eq!(result.formula.primary_color.color.id, 2);
    }

    #[tokio::test]
    async fn corrective_selection_is_highest_level_first() {
        // Lifting 8 -> 9 exposes yellow-orange, so the violet family is
        // requested; the level-9 corrector must win over the pure pigment.
        let catalog = FakeCatalog {
            colors: vec![
                shade(1, "Natural Very Light Blonde", "9N", 9, ToneCategory::Natural, false),
                shade(2, "Violet Corrector", "V0", 0, ToneCategory::Violet, true),
                shade(3, "Violet Light Blonde", "9V", 9, ToneCategory::Violet, true),
            ],
            brands: vec![brand_with_ratio("1:1")],
        };

        let result = calculate_formula(&catalog, &request(8, 9, ToneCategory::Natural))
            .await
            .unwrap();

        assert_eq!(result.formula.corrective_colors[0].color.id, 3);
    }

    #[tokio::test]
    async fn developer_amount_follows_line_mixing_ratio() {
        let catalog = FakeCatalog {
            colors: vec![shade(1, "Ash Light Blonde", "8A", 8, ToneCategory::Ash, false)],
            brands: vec![brand_with_ratio("1:1.5")],
        };

        let result = calculate_formula(&catalog, &request(7, 8, ToneCategory::Ash))
            .await
            .unwrap();

        assert_eq!(result.formula.developer.amount, 3.0);
    }

    #[tokio::test]
    async fn unknown_line_falls_back_to_even_ratio() {
        let mut brand = brand_with_ratio("1:2");
        brand.color_lines[0].name = "Some Other Line".to_string();
        let catalog = FakeCatalog {
            colors: vec![shade(1, "Ash Light Blonde", "8A", 8, ToneCategory::Ash, false)],
            brands: vec![brand],
        };

        let result = calculate_formula(&catalog, &request(7, 8, ToneCategory::Ash))
            .await
            .unwrap();

        assert_eq!(result.formula.developer.amount, 2.0);
    }

    #[tokio::test]
    async fn unknown_brand_is_an_error() {
        let catalog = FakeCatalog {
            colors: vec![shade(1, "Ash Light Blonde", "8A", 8, ToneCategory::Ash, false)],
            brands: vec![],
        };

        let error = calculate_formula(&catalog, &request(7, 8, ToneCategory::Ash))
            .await
            .unwrap_err();

        assert!(matches!(error, FormulaError::BrandNotFound(id) if id == BRAND_ID));
    }

    #[tokio::test]
    async fn calculation_is_deterministic() {
        let catalog = FakeCatalog {
            colors: vec![
                shade(1, "Ash Light Blonde", "8A", 8, ToneCategory::Ash, false),
                shade(2, "Ash Dark Blonde", "7A", 7, ToneCategory::Ash, true),
            ],
            brands: vec![brand_with_ratio("1:1.5")],
        };
        let request = request(6, 8, ToneCategory::Ash);

        let first = calculate_formula(&catalog, &request).await.unwrap();
        let second = calculate_formula(&catalog, &request).await.unwrap();

        assert_eq!(
            first.formula.primary_color.amount,
            second.formula.primary_color.amount
        );
        assert_eq!(
            first.formula.corrective_colors[0].amount,
            second.formula.corrective_colors[0].amount
        );
        assert_eq!(first.formula.developer.amount, second.formula.developer.amount);
        assert_eq!(first.processing_time, second.processing_time);
        assert_eq!(first.special_instructions, second.special_instructions);
    }
}
