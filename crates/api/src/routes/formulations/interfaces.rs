use chrono::{DateTime, Utc};
use common_formulator::ToneCategory;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Input for a formula calculation. Levels describe the hair, not the
/// product, and must be within 1-10.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculateFormulationPayload {
    pub starting_level: i32,
    pub starting_tone: ToneCategory,
    pub desired_level: i32,
    pub desired_tone: ToneCategory,
    pub brand_id: i32,
    pub color_line: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrandRefDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColorRefDto {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub level: i32,
    pub tone: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryPortionDto {
    pub color: ColorRefDto,
    pub amount: f64,
    pub unit: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CorrectivePortionDto {
    pub color: ColorRefDto,
    pub amount: f64,
    pub unit: String,
    pub purpose: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperDto {
    pub volume: i32,
    pub amount: f64,
    pub unit: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormulaDto {
    pub primary_color: PrimaryPortionDto,
    pub corrective_colors: Vec<CorrectivePortionDto>,
    pub developer: DeveloperDto,
}

/// A stored formulation with brand and color references resolved for
/// display.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormulationDto {
    pub id: i32,
    pub starting_level: i32,
    pub starting_tone: ToneCategory,
    pub desired_level: i32,
    pub desired_tone: ToneCategory,
    pub brand: BrandRefDto,
    pub color_line: String,
    pub formula: FormulaDto,
    pub processing_time: i32,
    pub special_instructions: String,
    pub for_lifting: bool,
    pub for_depositing: bool,
    pub level_difference: i32,
    pub underlying_pigment: String,
    pub percentage_of_ash: i32,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}
