use common_formulator::{ColorAttributes, CorrectiveProperties, ToneCategory};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Catalog filters; all optional and combinable.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ColorsQuery {
    pub brand_id: Option<i32>,
    pub color_line: Option<String>,
    pub level: Option<i32>,
    pub tone_category: Option<ToneCategory>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateColorPayload {
    pub brand_id: i32,
    pub color_line: String,
    pub name: String,
    pub code: String,
    pub level: i32,
    pub tone: String,
    pub tone_category: ToneCategory,
    pub hex_color: Option<String>,
    #[serde(default)]
    pub is_high_lift: bool,
    #[serde(default)]
    pub is_corrective: bool,
    #[serde(default = "default_corrective_properties")]
    pub corrective_properties: CorrectiveProperties,
    #[serde(default)]
    pub best_used_for: Vec<String>,
    pub color_attributes: Option<ColorAttributes>,
    pub special_instructions: Option<String>,
    pub image_url: Option<String>,
}

fn default_corrective_properties() -> CorrectiveProperties {
    CorrectiveProperties::None
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateColorPayload {
    pub color_line: Option<String>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub level: Option<i32>,
    pub tone: Option<String>,
    pub tone_category: Option<ToneCategory>,
    pub hex_color: Option<String>,
    pub is_high_lift: Option<bool>,
    pub is_corrective: Option<bool>,
    pub corrective_properties: Option<CorrectiveProperties>,
    pub best_used_for: Option<Vec<String>>,
    pub color_attributes: Option<ColorAttributes>,
    pub special_instructions: Option<String>,
    pub image_url: Option<String>,
}
