//! Nutrient lookup
//!
//! Resolves a food name against a [`FoodSource`] and scales the returned
//! per-100g profile to the requested quantity.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::converter::{scale_per_100g, to_grams};
use super::units::QuantityUnit;
use crate::models::NutrientProfile;

/// Nutrient lookup error types
#[derive(Debug, Error)]
pub enum LookupError {
    /// The source has no profile for this query
    #[error("No nutrition data found for '{query}'")]
    NotFound { query: String },

    /// Transport, status, or decoding failure talking to the source
    #[error("Nutrient lookup failed: {0}")]
    Failed(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LookupError::Failed("request timed out".to_string())
        } else {
            LookupError::Failed(e.to_string())
        }
    }
}

/// Raw answer from a food source. `per100` is absent when nothing matched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FoodRecord {
    #[serde(default)]
    pub item: Option<String>,
    #[serde(default)]
    pub per100: Option<NutrientProfile>,
}

/// External food-nutrition data source queried by name
#[async_trait]
pub trait FoodSource: Send + Sync {
    async fn find(&self, query: &str) -> Result<FoodRecord, LookupError>;
}

/// Result of a nutrient lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientResult {
    pub matched_food_name: String,
    pub requested_grams: f64,
    pub density_assumed: bool,
    pub per_100g: NutrientProfile,
    pub totals: NutrientProfile,
}

/// Look up `query` and scale its nutrients to `amount` of `unit`.
///
/// Issues exactly one request to `source`. A record without a per-100g
/// profile is reported as [`LookupError::NotFound`].
pub async fn lookup_nutrients(
    source: &dyn FoodSource,
    query: &str,
    amount: f64,
    unit: QuantityUnit,
) -> Result<NutrientResult, LookupError> {
    let quantity = to_grams(amount, unit);

    tracing::debug!(query, amount, unit = %unit, grams = quantity.grams, "Looking up nutrients");

    let record = source.find(query).await?;

    let per100 = record.per100.ok_or_else(|| LookupError::NotFound {
        query: query.to_string(),
    })?;

    let matched_food_name = record
        .item
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| query.to_string());

    tracing::info!(query, matched = %matched_food_name, grams = quantity.grams, "Nutrient lookup matched");

    Ok(NutrientResult {
        matched_food_name,
        requested_grams: quantity.grams,
        density_assumed: quantity.density_assumed,
        per_100g: per100.rounded(),
        totals: scale_per_100g(&per100, quantity.grams),
    })
}
