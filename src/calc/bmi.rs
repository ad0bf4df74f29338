//! Body Mass Index calculation
//!
//! BMI = weight (kg) / height (m)^2, classified into seven weight-status bands.

use serde::{Deserialize, Serialize};

use super::round_to_tenth;

/// Lower BMI bound of the healthy range, used for the ideal weight minimum
pub const IDEAL_BMI_MIN: f64 = 18.5;
/// Upper BMI bound of the healthy range, used for the ideal weight maximum
pub const IDEAL_BMI_MAX: f64 = 24.9;

/// Weight-status classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    #[serde(rename = "Severely Underweight")]
    SeverelyUnderweight,
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal Weight")]
    NormalWeight,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obese Class I")]
    ObeseClassI,
    #[serde(rename = "Obese Class II")]
    ObeseClassII,
    #[serde(rename = "Obese Class III")]
    ObeseClassIII,
}

impl BmiCategory {
    /// Classify a BMI value. Each threshold is the inclusive start of the next band.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 16.0 {
            BmiCategory::SeverelyUnderweight
        } else if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else if bmi < 35.0 {
            BmiCategory::ObeseClassI
        } else if bmi < 40.0 {
            BmiCategory::ObeseClassII
        } else {
            BmiCategory::ObeseClassIII
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::SeverelyUnderweight => "Severely Underweight",
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObeseClassI => "Obese Class I",
            BmiCategory::ObeseClassII => "Obese Class II",
            BmiCategory::ObeseClassIII => "Obese Class III",
        }
    }

    /// One-line guidance shown next to the result
    pub fn advice(&self) -> &'static str {
        match self {
            BmiCategory::SeverelyUnderweight => {
                "Your weight is well below the healthy range. Please consult a healthcare professional."
            }
            BmiCategory::Underweight => {
                "You are below the healthy range. A nutrient-dense diet and strength training can help."
            }
            BmiCategory::NormalWeight => {
                "You are in the healthy range. Keep up regular activity and balanced meals."
            }
            BmiCategory::Overweight => {
                "You are slightly above the healthy range. Regular exercise and portion control can help."
            }
            BmiCategory::ObeseClassI => {
                "Your BMI indicates obesity. A structured exercise and diet plan is recommended."
            }
            BmiCategory::ObeseClassII => {
                "Your BMI indicates severe obesity. Please seek guidance from a healthcare professional."
            }
            BmiCategory::ObeseClassIII => {
                "Your BMI indicates very severe obesity. Medical supervision is strongly recommended."
            }
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Weight range in whole kilograms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRange {
    pub min: f64,
    pub max: f64,
}

/// Result of a BMI calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI rounded to one decimal
    pub bmi: f64,
    pub category: BmiCategory,
    pub ideal_weight_range_kg: WeightRange,
}

/// Healthy weight range for a height, from BMI 18.5 to 24.9
pub fn ideal_weight_range(height_cm: f64) -> WeightRange {
    let height_m = height_cm / 100.0;
    let height_sq = height_m * height_m;

    WeightRange {
        min: (IDEAL_BMI_MIN * height_sq).round(),
        max: (IDEAL_BMI_MAX * height_sq).round(),
    }
}

/// Compute BMI, its category, and the ideal weight range.
///
/// Expects positive inputs. Out-of-range values are not rejected here and
/// simply produce an unusual BMI.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> BmiResult {
    let height_m = height_cm / 100.0;
    let bmi = round_to_tenth(weight_kg / (height_m * height_m));

    BmiResult {
        bmi,
        category: BmiCategory::from_bmi(bmi),
        ideal_weight_range_kg: ideal_weight_range(height_cm),
    }
}
