use crate::routes::formulations::catalog::PgCatalog;
use crate::routes::formulations::error::FormulationsError;
use crate::routes::formulations::interfaces::{
    BrandRefDto, CalculateFormulationPayload, ColorRefDto, CorrectivePortionDto, DeveloperDto,
    FormulaDto, FormulationDto, PrimaryPortionDto,
};
use chrono::{DateTime, Utc};
use common_formulator::ToneCategory;
use formula_core::mixing::UNIT;
use formula_core::{calculate_formula, FormulaRequest};
use sqlx::{FromRow, PgPool};

/// One formulation row with brand and color references joined in.
#[derive(FromRow)]
struct FormulationRow {
    id: i32,
    starting_level: i32,
    starting_tone: ToneCategory,
    desired_level: i32,
    desired_tone: ToneCategory,
    brand_id: i32,
    color_line: String,
    primary_color_id: i32,
    primary_amount: f64,
    corrective_color_id: Option<i32>,
    corrective_amount: Option<f64>,
    corrective_purpose: Option<String>,
    developer_volume: i32,
    developer_amount: f64,
    processing_time: i32,
    special_instructions: String,
    for_lifting: bool,
    for_depositing: bool,
    level_difference: i32,
    underlying_pigment: String,
    percentage_of_ash: i32,
    created_at: DateTime<Utc>,
    created_by: String,
    brand_name: String,
    primary_name: String,
    primary_code: String,
    primary_level: i32,
    primary_tone: String,
    corrective_name: Option<String>,
    corrective_code: Option<String>,
    corrective_level: Option<i32>,
    corrective_tone: Option<String>,
}

const SELECT_FORMULATIONS: &str = "
    SELECT f.*,
           b.name  AS brand_name,
           pc.name AS primary_name,
           pc.code AS primary_code,
           pc.level AS primary_level,
           pc.tone AS primary_tone,
           cc.name AS corrective_name,
           cc.code AS corrective_code,
           cc.level AS corrective_level,
           cc.tone AS corrective_tone
    FROM formulation f
             JOIN brand b ON b.id = f.brand_id
             JOIN color pc ON pc.id = f.primary_color_id
             LEFT JOIN color cc ON cc.id = f.corrective_color_id
";

impl FormulationRow {
    fn into_dto(self) -> FormulationDto {
        let corrective_colors = match (
            self.corrective_color_id,
            self.corrective_name,
            self.corrective_code,
            self.corrective_level,
            self.corrective_tone,
        ) {
            (Some(id), Some(name), Some(code), Some(level), Some(tone)) => {
                vec![CorrectivePortionDto {
                    color: ColorRefDto {
                        id,
                        name,
                        code,
                        level,
                        tone,
                    },
                    amount: self.corrective_amount.unwrap_or(0.0),
                    unit: UNIT.to_string(),
                    purpose: self.corrective_purpose,
                }]
            }
            _ => vec![],
        };

        FormulationDto {
            id: self.id,
            starting_level: self.starting_level,
            starting_tone: self.starting_tone,
            desired_level: self.desired_level,
            desired_tone: self.desired_tone,
            brand: BrandRefDto {
                id: self.brand_id,
                name: self.brand_name,
            },
            color_line: self.color_line,
            formula: FormulaDto {
                primary_color: PrimaryPortionDto {
                    color: ColorRefDto {
                        id: self.primary_color_id,
                        name: self.primary_name,
                        code: self.primary_code,
                        level: self.primary_level,
                        tone: self.primary_tone,
                    },
                    amount: self.primary_amount,
                    unit: UNIT.to_string(),
                },
                corrective_colors,
                developer: DeveloperDto {
                    volume: self.developer_volume,
                    amount: self.developer_amount,
                    unit: UNIT.to_string(),
                },
            },
            processing_time: self.processing_time,
            special_instructions: self.special_instructions,
            for_lifting: self.for_lifting,
            for_depositing: self.for_depositing,
            level_difference: self.level_difference,
            underlying_pigment: self.underlying_pigment,
            percentage_of_ash: self.percentage_of_ash,
            created_at: self.created_at,
            created_by: self.created_by,
        }
    }
}

/// Fetches all formulations, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn list_formulations(pool: &PgPool) -> Result<Vec<FormulationDto>, FormulationsError> {
    let sql = format!("{SELECT_FORMULATIONS} ORDER BY f.created_at DESC");
    let rows = sqlx::query_as::<_, FormulationRow>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(FormulationRow::into_dto).collect())
}

/// Fetches one formulation by id.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id, or a database error.
pub async fn find_formulation(pool: &PgPool, id: i32) -> Result<FormulationDto, FormulationsError> {
    let sql = format!("{SELECT_FORMULATIONS} WHERE f.id = $1");
    let row = sqlx::query_as::<_, FormulationRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(FormulationsError::NotFound)?;
    Ok(row.into_dto())
}

/// Runs the formula engine for the request and stores the resulting
/// formulation. Nothing is persisted when the calculation fails.
///
/// # Errors
///
/// Returns a validation error for out-of-range input, the engine's own error
/// when no primary color matches, or a database error.
pub async fn calculate_and_store(
    pool: &PgPool,
    payload: &CalculateFormulationPayload,
) -> Result<FormulationDto, FormulationsError> {
    validate(payload)?;

    let request = FormulaRequest {
        starting_level: payload.starting_level,
        starting_tone: payload.starting_tone,
        desired_level: payload.desired_level,
        desired_tone: payload.desired_tone,
        brand_id: payload.brand_id,
        color_line: payload.color_line.clone(),
    };
    let catalog = PgCatalog { pool };
    let result = calculate_formula(&catalog, &request).await?;

    let corrective = result.formula.corrective_colors.first();
    let id: i32 = sqlx::query_scalar(
        "INSERT INTO formulation (starting_level, starting_tone, desired_level, desired_tone,
                                  brand_id, color_line,
                                  primary_color_id, primary_amount,
                                  corrective_color_id, corrective_amount, corrective_purpose,
                                  developer_volume, developer_amount,
                                  processing_time, special_instructions,
                                  for_lifting, for_depositing, level_difference,
                                  underlying_pigment, percentage_of_ash)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)
         RETURNING id",
    )
    .bind(payload.starting_level)
    .bind(payload.starting_tone)
    .bind(payload.desired_level)
    .bind(payload.desired_tone)
    .bind(payload.brand_id)
    .bind(&payload.color_line)
    .bind(result.formula.primary_color.color.id)
    .bind(result.formula.primary_color.amount)
    .bind(corrective.map(|portion| portion.color.id))
    .bind(corrective.map(|portion| portion.amount))
    .bind(corrective.map(|portion| portion.purpose.clone()))
    .bind(result.formula.developer.volume)
    .bind(result.formula.developer.amount)
    .bind(result.processing_time)
    .bind(&result.special_instructions)
    .bind(result.for_lifting)
    .bind(result.for_depositing)
    .bind(result.level_difference)
    .bind(result.underlying_pigment.to_string())
    .bind(result.percentage_of_ash)
    .fetch_one(pool)
    .await?;

    find_formulation(pool, id).await
}

/// Deletes a formulation.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id, or a database error.
pub async fn delete_formulation(pool: &PgPool, id: i32) -> Result<(), FormulationsError> {
    let result = sqlx::query("DELETE FROM formulation WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(FormulationsError::NotFound);
    }
    Ok(())
}

fn validate(payload: &CalculateFormulationPayload) -> Result<(), FormulationsError> {
    for (field, level) in [
        ("startingLevel", payload.starting_level),
        ("desiredLevel", payload.desired_level),
    ] {
        if !(1..=10).contains(&level) {
            return Err(FormulationsError::Validation(format!(
                "{field} must be between 1 and 10"
            )));
        }
    }
    if payload.color_line.trim().is_empty() {
        return Err(FormulationsError::Validation(
            "colorLine must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(starting_level: i32, desired_level: i32, color_line: &str) -> CalculateFormulationPayload {
        CalculateFormulationPayload {
            starting_level,
            starting_tone: ToneCategory::Natural,
            desired_level,
            desired_tone: ToneCategory::Ash,
            brand_id: 1,
            color_line: color_line.to_string(),
        }
    }

    #[test]
    fn accepts_levels_within_range() {
        assert!(validate(&payload(1, 10, "Full Spectrum")).is_ok());
    }

    #[test]
    fn rejects_out_of_range_levels() {
        let error = validate(&payload(0, 8, "Full Spectrum")).unwrap_err();
        assert!(matches!(error, FormulationsError::Validation(ref m) if m.contains("startingLevel")));

        let error = validate(&payload(6, 11, "Full Spectrum")).unwrap_err();
        assert!(matches!(error, FormulationsError::Validation(ref m) if m.contains("desiredLevel")));
    }

    #[test]
    fn rejects_blank_color_line() {
        let error = validate(&payload(6, 8, "  ")).unwrap_err();
        assert!(matches!(error, FormulationsError::Validation(ref m) if m.contains("colorLine")));
    }
}
