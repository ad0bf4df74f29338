//! Nutrient profile data structure
//!
//! Used for both the per-100g profile returned by the food source and the
//! scaled totals for a requested quantity.

use serde::{Deserialize, Serialize};

use crate::calc::round_to_tenth;

/// Nutrient values for some amount of a food
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fat: f64,     // grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>, // grams
}

impl NutrientProfile {
    /// Scale every field by a multiplier, keeping `fiber` absent if it was absent
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
            fiber: self.fiber.map(|f| f * multiplier),
        }
    }

    /// Round every field to one decimal place
    pub fn rounded(&self) -> Self {
        Self {
            calories: round_to_tenth(self.calories),
            protein: round_to_tenth(self.protein),
            carbs: round_to_tenth(self.carbs),
            fat: round_to_tenth(self.fat),
            fiber: self.fiber.map(round_to_tenth),
        }
    }
}
