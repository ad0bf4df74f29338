//! Data models
//!
//! Request-scoped value types shared by the calculators.

mod nutrition;
mod profile;

pub use nutrition::NutrientProfile;
pub use profile::{age_on, ActivityLevel, BiometricProfile, Goal, Sex};
