//! Salt to sodium conversion
//!
//! Daily values are defined for sodium in milligrams, while food databases
//! report salt in grams. Salt is approximately 40% sodium by weight.

use super::calculator::{calculate_daily_value, DvResult};
use super::units::resolve_unit;

/// Milligrams of sodium per gram of salt
pub const SODIUM_MG_PER_SALT_G: f64 = 400.0;

/// Convert grams of salt to the equivalent milligrams of sodium
pub fn convert_salt_to_sodium(salt_grams: f64) -> f64 {
    salt_grams * SODIUM_MG_PER_SALT_G
}

/// %DV of a salt measurement, evaluated against the sodium reference value
///
/// The percentage comes from the sodium-equivalent amount; the unit stays
/// that of the salt measurement (grams).
pub fn sodium_daily_value_for_salt(salt_grams: f64) -> DvResult {
    let sodium = calculate_daily_value("sodium_100g", convert_salt_to_sodium(salt_grams));
    DvResult {
        unit: resolve_unit("salt_100g"),
        ..sodium
    }
}
