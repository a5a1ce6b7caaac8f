//! One-shot sample data for the catalog: four professional brands with their
//! color lines, and a full shade set for Aveda.

use common_formulator::{CorrectiveProperties, ToneCategory};
use sqlx::PgPool;
use tracing::info;

struct SeedLine {
    name: &'static str,
    description: &'static str,
    is_permanent: bool,
    is_demi_permanent: bool,
    is_semi_permanent: bool,
    is_high_lift: bool,
    developer_options: &'static [i32],
    mixing_ratio: &'static str,
}

struct SeedBrand {
    name: &'static str,
    description: &'static str,
    website: &'static str,
    logo_url: &'static str,
    lines: &'static [SeedLine],
}

struct SeedColor {
    color_line: &'static str,
    name: &'static str,
    code: &'static str,
    level: i32,
    tone: &'static str,
    tone_category: ToneCategory,
    hex_color: &'static str,
    is_high_lift: bool,
    is_corrective: bool,
    corrective_properties: CorrectiveProperties,
}

const BRANDS: &[SeedBrand] = &[
    SeedBrand {
        name: "Aveda",
        description: "Aveda is a cruelty-free brand with plant-based hair care and hair color products.",
        website: "https://www.aveda.com",
        logo_url: "https://www.aveda.com/media/images/aveda-logo.png",
        lines: &[
            SeedLine {
                name: "Full Spectrum",
                description: "Permanent hair color with up to 96% naturally derived ingredients",
                is_permanent: true,
                is_demi_permanent: false,
                is_semi_permanent: false,
                is_high_lift: true,
                developer_options: &[10, 20, 30, 40],
                mixing_ratio: "1:1",
            },
            SeedLine {
                name: "Pure Tone Deposit-Only",
                description: "Deposit-only color for adding tone without lifting",
                is_permanent: false,
                is_demi_permanent: true,
                is_semi_permanent: false,
                is_high_lift: false,
                developer_options: &[10],
                mixing_ratio: "1:1",
            },
        ],
    },
    SeedBrand {
        name: "Redken",
        description: "Redken offers professional hair products, services and treatments for all hair types.",
        website: "https://www.redken.com",
        logo_url: "https://www.redken.com/media/images/redken-logo.png",
        lines: &[
            SeedLine {
                name: "Shades EQ",
                description: "Demi-permanent, ammonia-free hair color gloss",
                is_permanent: false,
                is_demi_permanent: true,
                is_semi_permanent: false,
                is_high_lift: false,
                developer_options: &[10],
                mixing_ratio: "1:1",
            },
            SeedLine {
                name: "Color Fusion",
                description: "Permanent hair color with advanced protein and ceramide technology",
                is_permanent: true,
                is_demi_permanent: false,
                is_semi_permanent: false,
                is_high_lift: true,
                developer_options: &[10, 20, 30, 40],
                mixing_ratio: "1:1",
            },
            SeedLine {
                name: "Color Gels",
                description: "Permanent hair color with superior gray coverage",
                is_permanent: true,
                is_demi_permanent: false,
                is_semi_permanent: false,
                is_high_lift: false,
                developer_options: &[10, 20, 30],
                mixing_ratio: "1:1",
            },
        ],
    },
    SeedBrand {
        name: "Wella",
        description: "Wella Professionals offers salon-quality hair color, care and styling products.",
        website: "https://www.wella.com",
        logo_url: "https://www.wella.com/media/images/wella-logo.png",
        lines: &[
            SeedLine {
                name: "Koleston Perfect",
                description: "Permanent hair color with Pure Balance Technology",
                is_permanent: true,
                is_demi_permanent: false,
                is_semi_permanent: false,
                is_high_lift: true,
                developer_options: &[10, 20, 30, 40],
                mixing_ratio: "1:1",
            },
            SeedLine {
                name: "Color Touch",
                description: "Demi-permanent color with vibrant results",
                is_permanent: false,
                is_demi_permanent: true,
                is_semi_permanent: false,
                is_high_lift: false,
                developer_options: &[6, 13],
                mixing_ratio: "1:2",
            },
            SeedLine {
                name: "Illumina Color",
                description: "Permanent color with light-reflecting technology",
                is_permanent: true,
                is_demi_permanent: false,
                is_semi_permanent: false,
                is_high_lift: true,
                developer_options: &[10, 20, 30, 40],
                mixing_ratio: "1:1",
            },
        ],
    },
    SeedBrand {
        name: "L'Oréal",
        description: "L'Oréal Professionnel offers premium salon hair products and color treatments.",
        website: "https://www.lorealprofessionnel.com",
        logo_url: "https://www.lorealprofessionnel.com/media/images/loreal-logo.png",
        lines: &[
            SeedLine {
                name: "Majirel",
                description: "Permanent creme hair color with deep conditioning",
                is_permanent: true,
                is_demi_permanent: false,
                is_semi_permanent: false,
                is_high_lift: true,
                developer_options: &[10, 20, 30, 40],
                mixing_ratio: "1:1.5",
            },
            SeedLine {
                name: "INOA",
                description: "Ammonia-free permanent hair color",
                is_permanent: true,
                is_demi_permanent: false,
                is_semi_permanent: false,
                is_high_lift: true,
                developer_options: &[10, 20, 30],
                mixing_ratio: "1:1",
            },
            SeedLine {
                name: "Dia Light",
                description: "Acidic demi-permanent hair color",
                is_permanent: false,
                is_demi_permanent: true,
                is_semi_permanent: false,
                is_high_lift: false,
                developer_options: &[9],
                mixing_ratio: "1:1.5",
            },
        ],
    },
];

const AVEDA_COLORS: &[SeedColor] = &[
    SeedColor {
        color_line: "Full Spectrum",
        name: "Natural Black",
        code: "1N",
        level: 1,
        tone: "N",
        tone_category: ToneCategory::Natural,
        hex_color: "#000000",
        is_high_lift: false,
        is_corrective: false,
        corrective_properties: CorrectiveProperties::None,
    },
    SeedColor {
        color_line: "Full Spectrum",
        name: "Natural Dark Brown",
        code: "3N",
        level: 3,
        tone: "N",
        tone_category: ToneCategory::Natural,
        hex_color: "#2C1A0D",
        is_high_lift: false,
        is_corrective: false,
        corrective_properties: CorrectiveProperties::None,
    },
    SeedColor {
        color_line: "Full Spectrum",
        name: "Ash Medium Brown",
        code: "5A",
        level: 5,
        tone: "A",
        tone_category: ToneCategory::Ash,
        hex_color: "#4A392B",
        is_high_lift: false,
        is_corrective: true,
        corrective_properties: CorrectiveProperties::NeutralizesOrange,
    },
    SeedColor {
        color_line: "Full Spectrum",
        name: "Gold Medium Brown",
        code: "5G",
        level: 5,
        tone: "G",
        tone_category: ToneCategory::Gold,
        hex_color: "#5A3E25",
        is_high_lift: false,
        is_corrective: false,
        corrective_properties: CorrectiveProperties::AddsWarmth,
    },
    SeedColor {
        color_line: "Full Spectrum",
        name: "Copper Light Brown",
        code: "6C",
        level: 6,
        tone: "C",
        tone_category: ToneCategory::Copper,
        hex_color: "#7A4A2B",
        is_high_lift: false,
        is_corrective: false,
        corrective_properties: CorrectiveProperties::AddsWarmth,
    },
    SeedColor {
        color_line: "Full Spectrum",
        name: "Ash Dark Blonde",
        code: "7A",
        level: 7,
        tone: "A",
        tone_category: ToneCategory::Ash,
        hex_color: "#9C7A5A",
        is_high_lift: false,
        is_corrective: true,
        corrective_properties: CorrectiveProperties::NeutralizesOrange,
    },
    SeedColor {
        color_line: "Full Spectrum",
        name: "Natural Blonde",
        code: "8N",
        level: 8,
        tone: "N",
        tone_category: ToneCategory::Natural,
        hex_color: "#D5AC78",
        is_high_lift: false,
        is_corrective: false,
        corrective_properties: CorrectiveProperties::None,
    },
    SeedColor {
        color_line: "Full Spectrum",
        name: "Violet Light Blonde",
        code: "9V",
        level: 9,
        tone: "V",
        tone_category: ToneCategory::Violet,
        hex_color: "#D8B298",
        is_high_lift: false,
        is_corrective: true,
        corrective_properties: CorrectiveProperties::NeutralizesYellow,
    },
    SeedColor {
        color_line: "Full Spectrum",
        name: "Extra Light Blonde",
        code: "10N",
        level: 10,
        tone: "N",
        tone_category: ToneCategory::Natural,
        hex_color: "#EFD6A7",
        is_high_lift: true,
        is_corrective: false,
        corrective_properties: CorrectiveProperties::None,
    },
    SeedColor {
        color_line: "Pure Tone Deposit-Only",
        name: "Blue Corrector",
        code: "Blue",
        level: 0,
        tone: "B",
        tone_category: ToneCategory::Blue,
        hex_color: "#2C3A55",
        is_high_lift: false,
        is_corrective: true,
        corrective_properties: CorrectiveProperties::NeutralizesOrange,
    },
    SeedColor {
        color_line: "Pure Tone Deposit-Only",
        name: "Violet Corrector",
        code: "Violet",
        level: 0,
        tone: "V",
        tone_category: ToneCategory::Violet,
        hex_color: "#6A385A",
        is_high_lift: false,
        is_corrective: true,
        corrective_properties: CorrectiveProperties::NeutralizesYellow,
    },
    SeedColor {
        color_line: "Pure Tone Deposit-Only",
        name: "Green Corrector",
        code: "Green",
        level: 0,
        tone: "GR",
        tone_category: ToneCategory::Green,
        hex_color: "#3C5939",
        is_high_lift: false,
        is_corrective: true,
        corrective_properties: CorrectiveProperties::NeutralizesRed,
    },
];

/// Clears the catalog and repopulates it with the sample data in a single
/// transaction.
///
/// # Errors
///
/// Returns an error if any database statement fails.
pub async fn seed_catalog(pool: &PgPool) -> color_eyre::Result<()> {
    let mut tx = pool.begin().await?;

    // Formulations reference colors and brands, so they go first.
    sqlx::query("DELETE FROM formulation").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM color").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM color_line").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM brand").execute(&mut *tx).await?;
    info!("Catalog cleared.");

    for brand in BRANDS {
        let brand_id: i32 = sqlx::query_scalar(
            "INSERT INTO brand (name, description, website, logo_url)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(brand.name)
        .bind(brand.description)
        .bind(brand.website)
        .bind(brand.logo_url)
        .fetch_one(&mut *tx)
        .await?;

        for line in brand.lines {
            sqlx::query(
                "INSERT INTO color_line (brand_id, name, description, is_permanent,
                                         is_demi_permanent, is_semi_permanent, is_high_lift,
                                         developer_options, mixing_ratio)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
            )
            .bind(brand_id)
            .bind(line.name)
            .bind(line.description)
            .bind(line.is_permanent)
            .bind(line.is_demi_permanent)
            .bind(line.is_semi_permanent)
            .bind(line.is_high_lift)
            .bind(line.developer_options)
            .bind(line.mixing_ratio)
            .execute(&mut *tx)
            .await?;
        }
        info!("Inserted brand {} with {} lines.", brand.name, brand.lines.len());

        if brand.name == "Aveda" {
            for color in AVEDA_COLORS {
                sqlx::query(
                    "INSERT INTO color (brand_id, color_line, name, code, level, tone,
                                        tone_category, hex_color, is_high_lift, is_corrective,
                                        corrective_properties)
                     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
                )
                .bind(brand_id)
                .bind(color.color_line)
                .bind(color.name)
                .bind(color.code)
                .bind(color.level)
                .bind(color.tone)
                .bind(color.tone_category)
                .bind(color.hex_color)
                .bind(color.is_high_lift)
                .bind(color.is_corrective)
                .bind(color.corrective_properties)
                .execute(&mut *tx)
                .await?;
            }
            info!("Inserted {} Aveda colors.", AVEDA_COLORS.len());
        }
    }

    tx.commit().await?;
    Ok(())
}
