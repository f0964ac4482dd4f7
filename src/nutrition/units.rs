//! Display units
//!
//! Resolves the unit a nutrient value is shown in, whether or not a
//! daily value exists for it.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::reference::nutrient_mapping;

/// Unit a nutrient amount is displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayUnit {
    #[serde(rename = "kcal")]
    Kcal,
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "mg")]
    Milligrams,
    #[serde(rename = "μg")]
    Micrograms,
}

impl DisplayUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayUnit::Kcal => "kcal",
            DisplayUnit::Grams => "g",
            DisplayUnit::Milligrams => "mg",
            DisplayUnit::Micrograms => "μg",
        }
    }
}

impl fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Resolve the display unit for a nutrient key
///
/// First match wins:
/// 1. key contains "energy" or "kcal" -> kcal
/// 2. key contains "sugars" -> g
/// 3. key contains "salt" -> g
/// 4. key maps to a DRV entry -> that entry's unit
/// 5. key contains "vitamin" or "mineral" -> mg
/// 6. otherwise g
///
/// The substring rules run before the table lookup, so e.g.
/// `added-sugars_100g` resolves to grams without a table entry.
pub fn resolve_unit(nutrient_key: &str) -> DisplayUnit {
    if nutrient_key.contains("energy") || nutrient_key.contains("kcal") {
        return DisplayUnit::Kcal;
    }

    if nutrient_key.contains("sugars") || nutrient_key.contains("salt") {
        return DisplayUnit::Grams;
    }

    if let Some(dv_key) = nutrient_mapping(nutrient_key).and_then(|m| m.daily_value_key()) {
        return dv_key.unit();
    }

    if nutrient_key.contains("vitamin") || nutrient_key.contains("mineral") {
        return DisplayUnit::Milligrams;
    }

    DisplayUnit::Grams
}
