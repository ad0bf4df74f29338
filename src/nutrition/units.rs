//! Unit types and conversion constants
//!
//! Quantity units accepted by the nutrient lookup and their gram factors.

use serde::{Deserialize, Serialize};

/// Category of a measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    /// Weight/mass units (g, kg)
    Weight,
    /// Volume units (ml, ltr)
    Volume,
}

/// Unit of a user-entered food quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantityUnit {
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "ml")]
    Milliliters,
    #[serde(rename = "ltr")]
    Liters,
}

// ============================================================================
// Conversion Constants
// ============================================================================

/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;
/// Assumed density for volume quantities. Not accurate for oils, syrups,
/// flours and the like; every volume conversion reports that it used this.
pub const GRAMS_PER_ML: f64 = 1.0;

impl QuantityUnit {
    /// Canonical short form
    pub fn as_str(&self) -> &'static str {
        match self {
            QuantityUnit::Grams => "g",
            QuantityUnit::Kilograms => "kg",
            QuantityUnit::Milliliters => "ml",
            QuantityUnit::Liters => "ltr",
        }
    }

    /// Parse a unit string, accepting common spellings
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        let trimmed = lower.trim();

        match trimmed {
            "g" | "gram" | "grams" => Some(QuantityUnit::Grams),
            "kg" | "kilogram" | "kilograms" => Some(QuantityUnit::Kilograms),
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
                Some(QuantityUnit::Milliliters)
            }
            "ltr" | "l" | "liter" | "liters" | "litre" | "litres" => Some(QuantityUnit::Liters),
            _ => None,
        }
    }

    pub fn category(&self) -> UnitCategory {
        match self {
            QuantityUnit::Grams | QuantityUnit::Kilograms => UnitCategory::Weight,
            QuantityUnit::Milliliters | QuantityUnit::Liters => UnitCategory::Volume,
        }
    }

    /// Grams represented by one of this unit
    pub fn grams_per_unit(&self) -> f64 {
        match self {
            QuantityUnit::Grams => 1.0,
            QuantityUnit::Kilograms => G_PER_KG,
            QuantityUnit::Milliliters => GRAMS_PER_ML,
            QuantityUnit::Liters => ML_PER_LITER * GRAMS_PER_ML,
        }
    }
}

impl std::fmt::Display for QuantityUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
