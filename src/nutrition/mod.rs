//! Nutrition evaluation module
//!
//! Daily value calculation, display units, and tier classification.

pub mod calculator;
pub mod classifier;
pub mod converter;
pub mod grade;
pub mod reference;
pub mod units;

pub use calculator::{
    calculate_daily_value, round_to_tenth, try_calculate_daily_value, validate_measurement,
    DailyValue, DvResult,
};
pub use classifier::{bar_fill, classify_dv_color, classify_dv_label, DvTier};
pub use converter::{convert_salt_to_sodium, sodium_daily_value_for_salt, SODIUM_MG_PER_SALT_G};
pub use grade::{grade_color, NutriScoreGrade};
pub use reference::{nutrient_mapping, DailyValueKey, NutrientMapping, NUTRIENT_DV_MAPPING};
pub use units::{resolve_unit, DisplayUnit};
