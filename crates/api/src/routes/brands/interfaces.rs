use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColorLinePayload {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_permanent: bool,
    #[serde(default)]
    pub is_demi_permanent: bool,
    #[serde(default)]
    pub is_semi_permanent: bool,
    #[serde(default)]
    pub is_high_lift: bool,
    #[serde(default)]
    pub developer_options: Vec<i32>,
    #[serde(default = "default_mixing_ratio")]
    pub mixing_ratio: String,
}

fn default_mixing_ratio() -> String {
    "1:1".to_string()
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrandPayload {
    pub name: String,
    pub description: String,
    pub website: String,
    #[serde(default)]
    pub color_lines: Vec<ColorLinePayload>,
    pub logo_url: Option<String>,
}

/// Partial update; absent fields keep their current value. Supplying
/// `colorLines` replaces the full set of lines.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBrandPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub color_lines: Option<Vec<ColorLinePayload>>,
    pub logo_url: Option<String>,
}
