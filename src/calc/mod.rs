//! Health calculation engines
//!
//! Pure BMI and daily calorie computations. Neither engine validates ranges;
//! callers check inputs before invoking them.

pub mod bmi;
pub mod calories;

pub use bmi::{compute_bmi, ideal_weight_range, BmiCategory, BmiResult, WeightRange};
pub use calories::{
    compute_bmr, compute_calories, macro_split, CalorieResult, MacroSplit, Macronutrients,
};

/// Round to one decimal place
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
