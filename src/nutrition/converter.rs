//! Quantity conversion and per-100g scaling
//!
//! Converts a user-entered amount into grams and scales a per-100g nutrient
//! profile to that weight.

use serde::Serialize;

use super::units::{QuantityUnit, UnitCategory};
use crate::models::NutrientProfile;

/// An amount converted to grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GramQuantity {
    pub grams: f64,
    /// True when a volume was converted with the 1 g/ml density approximation
    pub density_assumed: bool,
}

/// Convert an amount in the given unit to grams
pub fn to_grams(amount: f64, unit: QuantityUnit) -> GramQuantity {
    GramQuantity {
        grams: amount * unit.grams_per_unit(),
        density_assumed: unit.category() == UnitCategory::Volume,
    }
}

/// Multiplier that turns a per-100g value into a value for `grams`
pub fn per_100g_factor(grams: f64) -> f64 {
    grams / 100.0
}

/// Scale a per-100g profile to `grams`, rounding each field to one decimal
pub fn scale_per_100g(per_100g: &NutrientProfile, grams: f64) -> NutrientProfile {
    per_100g.scale(per_100g_factor(grams)).rounded()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banana() -> NutrientProfile {
        NutrientProfile {
            calories: 89.0,
            protein: 1.1,
            carbs: 22.8,
            fat: 0.3,
            fiber: Some(2.6),
        }
    }

    #[test]
    fn test_to_grams() {
        assert_eq!(to_grams(250.0, QuantityUnit::Grams).grams, 250.0);
        assert_eq!(to_grams(1.5, QuantityUnit::Kilograms).grams, 1500.0);
        assert_eq!(to_grams(330.0, QuantityUnit::Milliliters).grams, 330.0);
        assert_eq!(to_grams(2.0, QuantityUnit::Liters).grams, 2000.0);
    }

    #[test]
    fn test_density_flag() {
        assert!(!to_grams(1.0, QuantityUnit::Grams).density_assumed);
        assert!(!to_grams(1.0, QuantityUnit::Kilograms).density_assumed);
        assert!(to_grams(1.0, QuantityUnit::Milliliters).density_assumed);
        assert!(to_grams(1.0, QuantityUnit::Liters).density_assumed);
    }

    #[test]
    fn test_liter_and_milliliters_scale_identically() {
        let one_liter = to_grams(1.0, QuantityUnit::Liters);
        let thousand_ml = to_grams(1000.0, QuantityUnit::Milliliters);
        assert_eq!(one_liter.grams, 1000.0);
        assert_eq!(thousand_ml.grams, 1000.0);
        assert_eq!(
            scale_per_100g(&banana(), one_liter.grams),
            scale_per_100g(&banana(), thousand_ml.grams)
        );
    }

    #[test]
    fn test_hundred_grams_is_identity() {
        assert_eq!(scale_per_100g(&banana(), 100.0), banana());
    }

    #[test]
    fn test_scale_rounds_to_tenth() {
        let totals = scale_per_100g(&banana(), 150.0);
        assert_eq!(totals.calories, 133.5);
        assert_eq!(totals.protein, 1.7); // 1.65
        assert_eq!(totals.carbs, 34.2);
        assert_eq!(totals.fiber, Some(3.9));
    }
}
