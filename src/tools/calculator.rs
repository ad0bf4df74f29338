//! Health Calculator Tools
//!
//! Input validation and response shaping for the BMI, calorie, and nutrient
//! lookup calculators. Engines are only invoked with validated input.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::calc::{compute_bmi, compute_calories, BmiResult, CalorieResult};
use crate::models::{age_on, ActivityLevel, BiometricProfile, Goal, Sex};
use crate::nutrition::{lookup_nutrients, FoodSource, LookupError, NutrientResult, QuantityUnit};

pub const HEIGHT_CM_RANGE: (f64, f64) = (100.0, 250.0);
pub const WEIGHT_KG_RANGE: (f64, f64) = (30.0, 300.0);
pub const AGE_YEARS_RANGE: (f64, f64) = (15.0, 100.0);
/// Ages accepted when derived from a date of birth
pub const MIN_DERIVED_AGE: u32 = 2;
pub const MAX_DERIVED_AGE: u32 = 120;

/// Rejected calculator input
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Invalid {field}: '{value}'")]
    Invalid { field: &'static str, value: String },
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, InputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InputError::Missing(field));
    }
    Ok(trimmed)
}

fn in_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<f64, InputError> {
    // NaN fails both comparisons, so test the positive condition
    if value >= min && value <= max {
        Ok(value)
    } else {
        Err(InputError::OutOfRange { field, value, min, max })
    }
}

fn parse_sex(value: &str) -> Result<Sex, InputError> {
    let value = required("sex", value)?;
    Sex::from_str(value).ok_or_else(|| InputError::Invalid {
        field: "sex",
        value: value.to_string(),
    })
}

// ============================================================================
// BMI
// ============================================================================

/// Response for calculate_bmi
#[derive(Debug, Serialize)]
pub struct BmiResponse {
    pub name: String,
    pub age_years: u32,
    pub sex: Sex,
    pub height_cm: f64,
    pub weight_kg: f64,
    #[serde(flatten)]
    pub result: BmiResult,
    pub advice: &'static str,
}

/// Validate the BMI form and compute BMI. Age is derived from `date_of_birth` as of `today`.
pub fn calculate_bmi(
    name: &str,
    date_of_birth: &str,
    sex: &str,
    height_cm: f64,
    weight_kg: f64,
    today: NaiveDate,
) -> Result<BmiResponse, InputError> {
    let name = required("name", name)?;
    let dob_raw = required("date_of_birth", date_of_birth)?;
    let sex = parse_sex(sex)?;
    let height_cm = in_range("height_cm", height_cm, HEIGHT_CM_RANGE)?;
    let weight_kg = in_range("weight_kg", weight_kg, WEIGHT_KG_RANGE)?;

    let dob = NaiveDate::parse_from_str(dob_raw, "%Y-%m-%d").map_err(|_| InputError::Invalid {
        field: "date_of_birth",
        value: dob_raw.to_string(),
    })?;

    let age_years = age_on(dob, today)
        .filter(|age| (MIN_DERIVED_AGE..=MAX_DERIVED_AGE).contains(age))
        .ok_or_else(|| InputError::Invalid {
            field: "date_of_birth",
            value: dob_raw.to_string(),
        })?;

    let result = compute_bmi(height_cm, weight_kg);
    tracing::debug!(bmi = result.bmi, category = %result.category, "BMI calculated");

    Ok(BmiResponse {
        name: name.to_string(),
        age_years,
        sex,
        height_cm,
        weight_kg,
        advice: result.category.advice(),
        result,
    })
}

// ============================================================================
// Calories
// ============================================================================

/// Validate the calorie form and compute the daily calorie plan
pub fn calculate_calories(
    height_cm: f64,
    weight_kg: f64,
    age_years: f64,
    sex: &str,
    activity_level: &str,
    goal: &str,
) -> Result<CalorieResult, InputError> {
    let height_cm = in_range("height_cm", height_cm, HEIGHT_CM_RANGE)?;
    let weight_kg = in_range("weight_kg", weight_kg, WEIGHT_KG_RANGE)?;
    let age = in_range("age_years", age_years, AGE_YEARS_RANGE)?;
    if age.fract() != 0.0 {
        return Err(InputError::Invalid {
            field: "age_years",
            value: age_years.to_string(),
        });
    }
    let sex = parse_sex(sex)?;

    let activity_raw = required("activity_level", activity_level)?;
    let activity_level = ActivityLevel::from_str(activity_raw).ok_or_else(|| InputError::Invalid {
        field: "activity_level",
        value: activity_raw.to_string(),
    })?;

    let goal_raw = required("goal", goal)?;
    let goal = Goal::from_str(goal_raw).ok_or_else(|| InputError::Invalid {
        field: "goal",
        value: goal_raw.to_string(),
    })?;

    let profile = BiometricProfile {
        height_cm,
        weight_kg,
        age_years: age as u32,
        sex,
    };

    let result = compute_calories(&profile, activity_level, goal);
    tracing::debug!(
        bmr = result.bmr,
        target = result.target_calories,
        goal = goal.as_str(),
        macro_kcal = result.macronutrients.total_kcal(),
        "Calories calculated"
    );

    Ok(result)
}

// ============================================================================
// Nutrient Lookup
// ============================================================================

/// Response for lookup_nutrients
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupNutrientsResponse {
    Found(NutrientResult),
    NotFound { query: String, message: String },
    Failed { query: String, message: String, retryable: bool },
}

/// Validated lookup request
#[derive(Debug, Clone, PartialEq)]
pub struct LookupRequest {
    pub query: String,
    pub amount: f64,
    pub unit: QuantityUnit,
}

/// Validate the nutrient lookup form
pub fn parse_lookup_request(query: &str, amount: f64, unit: &str) -> Result<LookupRequest, InputError> {
    let query = required("query", query)?;

    if !(amount.is_finite() && amount > 0.0) {
        return Err(InputError::Invalid {
            field: "amount",
            value: amount.to_string(),
        });
    }

    let unit_raw = required("unit", unit)?;
    let unit = QuantityUnit::from_str(unit_raw).ok_or_else(|| InputError::Invalid {
        field: "unit",
        value: unit_raw.to_string(),
    })?;

    Ok(LookupRequest {
        query: query.to_string(),
        amount,
        unit,
    })
}

/// Run a validated lookup, folding lookup errors into a user-facing response
pub async fn lookup_nutrients_tool(
    source: &dyn FoodSource,
    request: &LookupRequest,
) -> LookupNutrientsResponse {
    match lookup_nutrients(source, &request.query, request.amount, request.unit).await {
        Ok(result) => LookupNutrientsResponse::Found(result),
        Err(e @ LookupError::NotFound { .. }) => {
            tracing::info!(query = %request.query, "No nutrition data for query");
            LookupNutrientsResponse::NotFound {
                query: request.query.clone(),
                message: format!("{}. Try a different search term.", e),
            }
        }
        Err(e @ LookupError::Failed(_)) => {
            tracing::warn!(query = %request.query, error = %e, "Nutrient lookup failed");
            LookupNutrientsResponse::Failed {
                query: request.query.clone(),
                message: format!("{}. Please try again.", e),
                retryable: true,
            }
        }
    }
}
