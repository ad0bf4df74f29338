//! Health Calculator Status Tool
//!
//! Provides runtime status information and usage instructions.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info;

/// Calculator instructions for AI assistants
pub const CALCULATOR_INSTRUCTIONS: &str = r#"
# Health Calculator Instructions

Three independent calculators. Each call is a single calculation; nothing is stored.

---

## 1. BMI Calculator (`calculate_bmi`)

| Field | Format | Notes |
|-------|--------|-------|
| name | text | required |
| date_of_birth | YYYY-MM-DD | required, used to derive age |
| sex | male / female | required |
| height_cm | 100 - 250 | |
| weight_kg | 30 - 300 | |

Returns BMI (1 decimal), category, ideal weight range (BMI 18.5 - 24.9 at the
same height, whole kg), and a short advice line.

### Categories

| BMI | Category |
|-----|----------|
| below 16 | Severely Underweight |
| 16 - 18.4 | Underweight |
| 18.5 - 24.9 | Normal Weight |
| 25 - 29.9 | Overweight |
| 30 - 34.9 | Obese Class I |
| 35 - 39.9 | Obese Class II |
| 40 and above | Obese Class III |

---

## 2. Calorie Calculator (`calculate_calories`)

| Field | Values |
|-------|--------|
| height_cm | 100 - 250 |
| weight_kg | 30 - 300 |
| age_years | whole number, 15 - 100 |
| sex | male / female |
| activity_level | sedentary, light, moderate, active, very_active |
| goal | lose, maintain, gain |

BMR uses the revised Harris-Benedict equation. Maintenance = BMR x activity
multiplier (1.2 / 1.375 / 1.55 / 1.725 / 1.9). Target = maintenance x 0.85
(lose), x 1.0 (maintain), or x 1.15 (gain).

Macro split of target calories (protein / carbs / fat):
- lose: 35% / 40% / 25%
- maintain: 25% / 50% / 25%
- gain: 30% / 50% / 20%

---

## 3. Nutrient Lookup (`lookup_nutrients`)

| Field | Values |
|-------|--------|
| query | food name, e.g. "banana" |
| amount | positive number |
| unit | g, kg, ml, ltr |

Volumes are converted at 1 g per ml. This is an approximation; the response
sets `density_assumed: true` when it was applied.

Response `status`:
- `found`: matched food, per-100g profile, and totals for the requested amount
- `not_found`: ask the user for a different search term
- `failed`: the nutrition service was unavailable; the user may retry
"#;

/// Health calculator status information
#[derive(Debug, Serialize)]
pub struct HealthCalcStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub nutrient_api_url: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Tracks service status
pub struct StatusTracker {
    start_time: Instant,
    nutrient_api_url: String,
}

impl StatusTracker {
    pub fn new(nutrient_api_url: impl Into<String>) -> Self {
        Self {
            start_time: Instant::now(),
            nutrient_api_url: nutrient_api_url.into(),
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> HealthCalcStatus {
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        HealthCalcStatus {
            build_number: build_info::BUILD_NUMBER,
            build_timestamp: build_info::BUILD_TIMESTAMP,
            version: build_info::VERSION,
            nutrient_api_url: self.nutrient_api_url.clone(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
