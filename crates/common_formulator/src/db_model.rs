use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;

/// Maps to the `tone_category` Postgres enum.
///
/// Every shade in the catalog is categorized into exactly one of these.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, Hash, ToSchema)]
#[sqlx(type_name = "tone_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ToneCategory {
    Natural,
    Ash,
    Gold,
    Copper,
    Red,
    Violet,
    Blue,
    Green,
    Brown,
    Special,
}

impl fmt::Display for ToneCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Natural => "natural",
            Self::Ash => "ash",
            Self::Gold => "gold",
            Self::Copper => "copper",
            Self::Red => "red",
            Self::Violet => "violet",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Brown => "brown",
            Self::Special => "special",
        };
        write!(f, "{name}")
    }
}

/// Maps to the `corrective_properties` Postgres enum: what undertone a shade
/// neutralizes or adds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "corrective_properties", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum CorrectiveProperties {
    NeutralizesYellow,
    NeutralizesOrange,
    NeutralizesRed,
    AddsWarmth,
    AddsCoolness,
    None,
}

/// A color manufacturer carrying one or more color lines.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub website: String,
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A named product line under a brand, with its mixing ratio ("color:developer",
/// e.g. "1:1.5") and permanence classification.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColorLine {
    pub id: i32,
    pub brand_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub is_permanent: bool,
    pub is_demi_permanent: bool,
    pub is_semi_permanent: bool,
    pub is_high_lift: bool,
    pub developer_options: Vec<i32>,
    pub mixing_ratio: String,
}

/// A brand together with all of its color lines.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrandWithLines {
    #[serde(flatten)]
    pub brand: Brand,
    pub color_lines: Vec<ColorLine>,
}

/// Free-form attributes describing how a shade behaves on the hair.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColorAttributes {
    pub intensity: Option<i32>,
    #[serde(default)]
    pub reflective: bool,
    #[serde(default)]
    pub opaque: bool,
}

/// A single shade in the product catalog.
///
/// `(brand_id, color_line, code)` is unique. Level 0 is used by pure-pigment
/// correctors that carry no lightness of their own.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub id: i32,
    pub brand_id: i32,
    pub color_line: String,
    pub name: String,
    pub code: String,
    pub level: i32,
    pub tone: String,
    pub tone_category: ToneCategory,
    pub hex_color: Option<String>,
    pub is_high_lift: bool,
    pub is_corrective: bool,
    pub corrective_properties: CorrectiveProperties,
    pub best_used_for: Vec<String>,
    #[schema(value_type = Option<ColorAttributes>)]
    pub color_attributes: Option<sqlx::types::Json<ColorAttributes>>,
    pub special_instructions: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

