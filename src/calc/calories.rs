//! Daily calorie calculation
//!
//! BMR from the revised Harris-Benedict equation, scaled by activity level,
//! adjusted for the weight goal, then split into macronutrients.

use serde::{Deserialize, Serialize};

use crate::models::{ActivityLevel, BiometricProfile, Goal, Sex};

/// Calories per gram of protein
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// Calories per gram of carbohydrate
pub const KCAL_PER_G_CARBS: f64 = 4.0;
/// Calories per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Share of target calories for each macronutrient (sums to 1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Macronutrient targets in whole grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macronutrients {
    pub protein_grams: i64,
    pub carbs_grams: i64,
    pub fat_grams: i64,
}

impl Macronutrients {
    /// Calories represented by these grams
    pub fn total_kcal(&self) -> f64 {
        self.protein_grams as f64 * KCAL_PER_G_PROTEIN
            + self.carbs_grams as f64 * KCAL_PER_G_CARBS
            + self.fat_grams as f64 * KCAL_PER_G_FAT
    }
}

/// Result of a daily calorie calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieResult {
    pub bmr: i64,
    pub maintenance_calories: i64,
    pub target_calories: i64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub macronutrients: Macronutrients,
}

/// Protein/carbs/fat percentages for a goal
pub fn macro_split(goal: Goal) -> MacroSplit {
    match goal {
        Goal::Lose => MacroSplit { protein: 0.35, carbs: 0.40, fat: 0.25 },
        Goal::Gain => MacroSplit { protein: 0.30, carbs: 0.50, fat: 0.20 },
        Goal::Maintain => MacroSplit { protein: 0.25, carbs: 0.50, fat: 0.25 },
    }
}

/// Basal Metabolic Rate, rounded to the nearest calorie
pub fn compute_bmr(profile: &BiometricProfile) -> i64 {
    let weight = profile.weight_kg;
    let height = profile.height_cm;
    let age = f64::from(profile.age_years);

    let bmr = match profile.sex {
        Sex::Male => 88.362 + 13.397 * weight + 4.799 * height - 5.677 * age,
        Sex::Female => 447.593 + 9.247 * weight + 3.098 * height - 4.330 * age,
    };

    bmr.round() as i64
}

fn macronutrients_for(target_calories: i64, goal: Goal) -> Macronutrients {
    let split = macro_split(goal);
    let target = target_calories as f64;

    Macronutrients {
        protein_grams: (target * split.protein / KCAL_PER_G_PROTEIN).round() as i64,
        carbs_grams: (target * split.carbs / KCAL_PER_G_CARBS).round() as i64,
        fat_grams: (target * split.fat / KCAL_PER_G_FAT).round() as i64,
    }
}

/// Compute BMR, maintenance and target calories, and macronutrient grams.
///
/// Maintenance is derived from the already-rounded BMR, and the target from
/// the already-rounded maintenance figure.
pub fn compute_calories(
    profile: &BiometricProfile,
    activity_level: ActivityLevel,
    goal: Goal,
) -> CalorieResult {
    let bmr = compute_bmr(profile);
    let maintenance_calories = (bmr as f64 * activity_level.multiplier()).round() as i64;

    let target_calories = match goal {
        Goal::Maintain => maintenance_calories,
        Goal::Lose | Goal::Gain => {
            (maintenance_calories as f64 * goal.calorie_factor()).round() as i64
        }
    };

    CalorieResult {
        bmr,
        maintenance_calories,
        target_calories,
        activity_level,
        goal,
        macronutrients: macronutrients_for(target_calories, goal),
    }
}
