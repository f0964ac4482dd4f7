//! Percent Daily Value calculation
//!
//! Converts a per-100g nutrient measurement into the share of its daily
//! reference value it represents.

use serde::Serialize;

use super::reference::nutrient_mapping;
use super::units::{resolve_unit, DisplayUnit};
use crate::error::{EvalError, EvalResult};

/// Whether a daily value applies to a nutrient, and what it came to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DailyValue {
    Applies {
        /// Reference amount the measurement was divided by
        daily_value: f64,
        /// Percent of the reference amount, rounded to one decimal place
        percentage: f64,
    },
    NotApplicable,
}

/// Result of a %DV calculation
///
/// Serializes to the flat `{dailyValue, percentage, unit, hasDV}` record the
/// presentation layer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "DvRecord")]
pub struct DvResult {
    pub daily_value: DailyValue,
    pub unit: DisplayUnit,
}

impl DvResult {
    pub fn has_dv(&self) -> bool {
        matches!(self.daily_value, DailyValue::Applies { .. })
    }

    pub fn daily_value(&self) -> Option<f64> {
        match self.daily_value {
            DailyValue::Applies { daily_value, .. } => Some(daily_value),
            DailyValue::NotApplicable => None,
        }
    }

    pub fn percentage(&self) -> Option<f64> {
        match self.daily_value {
            DailyValue::Applies { percentage, .. } => Some(percentage),
            DailyValue::NotApplicable => None,
        }
    }

    fn not_applicable(unit: DisplayUnit) -> Self {
        Self {
            daily_value: DailyValue::NotApplicable,
            unit,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DvRecord {
    daily_value: Option<f64>,
    percentage: Option<f64>,
    unit: DisplayUnit,
    #[serde(rename = "hasDV")]
    has_dv: bool,
}

impl From<DvResult> for DvRecord {
    fn from(result: DvResult) -> Self {
        Self {
            daily_value: result.daily_value(),
            percentage: result.percentage(),
            unit: result.unit,
            has_dv: result.has_dv(),
        }
    }
}

/// Round to one decimal place, halves away from zero
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calculate the %DV for a nutrient measurement per 100g
///
/// Never fails: unknown keys and nutrients without a daily value yield
/// [`DailyValue::NotApplicable`]. The measurement is not validated, so a
/// negative value produces a negative percentage.
pub fn calculate_daily_value(nutrient_key: &str, nutrient_value: f64) -> DvResult {
    let unit = resolve_unit(nutrient_key);

    let Some(mapping) = nutrient_mapping(nutrient_key) else {
        tracing::trace!("No DV mapping for nutrient key '{}'", nutrient_key);
        return DvResult::not_applicable(unit);
    };

    let daily_value = match mapping.daily_value_key().map(|k| k.amount()) {
        Some(amount) if amount > 0.0 => amount,
        _ => return DvResult::not_applicable(unit),
    };

    let percentage = round_to_tenth(nutrient_value / daily_value * 100.0);

    DvResult {
        daily_value: DailyValue::Applies {
            daily_value,
            percentage,
        },
        unit,
    }
}

/// Validated variant of [`calculate_daily_value`]
///
/// Rejects NaN, infinite, and negative measurements instead of passing
/// them through.
pub fn try_calculate_daily_value(nutrient_key: &str, nutrient_value: f64) -> EvalResult<DvResult> {
    validate_measurement(nutrient_key, nutrient_value)?;
    Ok(calculate_daily_value(nutrient_key, nutrient_value))
}

/// Check that a measurement is finite and non-negative
pub fn validate_measurement(nutrient_key: &str, nutrient_value: f64) -> EvalResult<()> {
    if nutrient_value.is_finite() && nutrient_value >= 0.0 {
        Ok(())
    } else {
        Err(EvalError::InvalidMeasurement {
            key: nutrient_key.to_string(),
            value: nutrient_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::reference::NUTRIENT_DV_MAPPING;

    #[test]
    fn test_protein() {
        let result = calculate_daily_value("proteins_100g", 10.0);
        assert!(result.has_dv());
        assert_eq!(result.percentage(), Some(20.0));
        assert_eq!(result.daily_value(), Some(50.0));
        assert_eq!(result.unit, DisplayUnit::Grams);
    }

    #[test]
    fn test_fat() {
        let result = calculate_daily_value("fat_100g", 15.6);
        assert!(result.has_dv());
        assert_eq!(result.percentage(), Some(20.0));
        assert_eq!(result.unit, DisplayUnit::Grams);
    }

    #[test]
    fn test_fiber() {
        let result = calculate_daily_value("fiber_100g", 5.6);
        assert!(result.has_dv());
        assert_eq!(result.percentage(), Some(20.0));
        assert_eq!(result.unit, DisplayUnit::Grams);
    }

    #[test]
    fn test_sugars_have_no_dv() {
        let result = calculate_daily_value("sugars_100g", 10.0);
        assert!(!result.has_dv());
        assert_eq!(result.percentage(), None);
        assert_eq!(result.daily_value(), None);
        assert_eq!(result.unit, DisplayUnit::Grams);
    }

    #[test]
    fn test_energy_has_no_dv() {
        let result = calculate_daily_value("energy_kcal_100g", 250.0);
        assert!(!result.has_dv());
        assert_eq!(result.percentage(), None);
        assert_eq!(result.unit, DisplayUnit::Kcal);
    }

    #[test]
    fn test_unknown_key() {
        let result = calculate_daily_value("unobtainium_100g", 3.0);
        assert!(!result.has_dv());
        assert_eq!(result.unit, DisplayUnit::Grams);
    }

    #[test]
    fn test_reference_amount_is_one_hundred_percent() {
        for (key, mapping) in NUTRIENT_DV_MAPPING {
            if let Some(dv_key) = mapping.daily_value_key() {
                let result = calculate_daily_value(key, dv_key.amount());
                assert_eq!(result.percentage(), Some(100.0), "{}", key);
            }
        }
    }

    #[test]
    fn test_no_dv_keys_ignore_value() {
        for value in [0.0, 1.0, 99.5, 10_000.0] {
            for (key, mapping) in NUTRIENT_DV_MAPPING {
                if mapping.daily_value_key().is_none() {
                    let result = calculate_daily_value(key, value);
                    assert!(!result.has_dv());
                    assert_eq!(result.percentage(), None);
                }
            }
        }
    }

    #[test]
    fn test_zero_is_zero_percent() {
        let result = calculate_daily_value("iron_100g", 0.0);
        assert!(result.has_dv());
        assert_eq!(result.percentage(), Some(0.0));
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        // 400 / 2300 * 100 = 17.3913...
        let result = calculate_daily_value("sodium_100g", 400.0);
        assert_eq!(result.percentage(), Some(17.4));
        assert_eq!(result.unit, DisplayUnit::Milligrams);

        // 1 / 78 * 100 = 1.282...
        assert_eq!(calculate_daily_value("fat_100g", 1.0).percentage(), Some(1.3));
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to_tenth(0.25), 0.3);
        assert_eq!(round_to_tenth(-0.25), -0.3);
        assert_eq!(round_to_tenth(12.34), 12.3);
    }

    #[test]
    fn test_negative_passes_through() {
        let result = calculate_daily_value("proteins_100g", -10.0);
        assert_eq!(result.percentage(), Some(-20.0));
    }

    #[test]
    fn test_idempotent() {
        let a = calculate_daily_value("calcium_100g", 123.4);
        let b = calculate_daily_value("calcium_100g", 123.4);
        assert_eq!(a, b);
    }

    #[test]
    fn test_try_calculate_rejects_bad_input() {
        assert!(matches!(
            try_calculate_daily_value("fat_100g", -1.0),
            Err(EvalError::InvalidMeasurement { .. })
        ));
        assert!(try_calculate_daily_value("fat_100g", f64::NAN).is_err());
        assert!(try_calculate_daily_value("fat_100g", f64::INFINITY).is_err());

        let ok = try_calculate_daily_value("fat_100g", 15.6).unwrap();
        assert_eq!(ok, calculate_daily_value("fat_100g", 15.6));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(calculate_daily_value("proteins_100g", 10.0)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "dailyValue": 50.0,
                "percentage": 20.0,
                "unit": "g",
                "hasDV": true
            })
        );

        let json = serde_json::to_value(calculate_daily_value("sugars_100g", 10.0)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "dailyValue": null,
                "percentage": null,
                "unit": "g",
                "hasDV": false
            })
        );
    }
}
