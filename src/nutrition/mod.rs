//! Nutrient lookup module
//!
//! Handles quantity conversion, the external food source, and per-100g scaling.

pub mod client;
pub mod converter;
pub mod lookup;
pub mod units;

pub use client::{HttpFoodSource, NutrientClientConfig};
pub use converter::{per_100g_factor, scale_per_100g, to_grams, GramQuantity};
pub use lookup::{lookup_nutrients, FoodRecord, FoodSource, LookupError, NutrientResult};
pub use units::{QuantityUnit, UnitCategory, GRAMS_PER_ML};
