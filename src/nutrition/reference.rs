//! Daily reference values and nutrient key mapping
//!
//! FDA Daily Reference Values (DRVs) for adults and children aged 4 and older,
//! based on a 2,000-calorie daily intake, plus the mapping from food-database
//! nutrient keys (per 100g) onto those values.

use serde::{Deserialize, Serialize};

use super::units::DisplayUnit;

/// An entry in the Daily Reference Value table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DailyValueKey {
    // Macronutrients
    TotalFat,
    SaturatedFat,
    Cholesterol,
    Sodium,
    Potassium,
    TotalCarbohydrate,
    DietaryFiber,
    Protein,

    // Vitamins
    VitaminA,
    VitaminC,
    VitaminD,
    VitaminE,
    VitaminK,
    /// Vitamin B1
    Thiamin,
    /// Vitamin B2
    Riboflavin,
    /// Vitamin B3
    Niacin,
    VitaminB6,
    Folate,
    VitaminB12,
    Biotin,
    PantothenicAcid,

    // Minerals
    Calcium,
    Iron,
    Phosphorus,
    Iodine,
    Magnesium,
    Zinc,
    Selenium,
    Copper,
    Manganese,
    Chromium,
    Molybdenum,
    Chloride,
    Choline,
}

impl DailyValueKey {
    /// Every table entry, in table order
    pub const ALL: [DailyValueKey; 34] = [
        DailyValueKey::TotalFat,
        DailyValueKey::SaturatedFat,
        DailyValueKey::Cholesterol,
        DailyValueKey::Sodium,
        DailyValueKey::Potassium,
        DailyValueKey::TotalCarbohydrate,
        DailyValueKey::DietaryFiber,
        DailyValueKey::Protein,
        DailyValueKey::VitaminA,
        DailyValueKey::VitaminC,
        DailyValueKey::VitaminD,
        DailyValueKey::VitaminE,
        DailyValueKey::VitaminK,
        DailyValueKey::Thiamin,
        DailyValueKey::Riboflavin,
        DailyValueKey::Niacin,
        DailyValueKey::VitaminB6,
        DailyValueKey::Folate,
        DailyValueKey::VitaminB12,
        DailyValueKey::Biotin,
        DailyValueKey::PantothenicAcid,
        DailyValueKey::Calcium,
        DailyValueKey::Iron,
        DailyValueKey::Phosphorus,
        DailyValueKey::Iodine,
        DailyValueKey::Magnesium,
        DailyValueKey::Zinc,
        DailyValueKey::Selenium,
        DailyValueKey::Copper,
        DailyValueKey::Manganese,
        DailyValueKey::Chromium,
        DailyValueKey::Molybdenum,
        DailyValueKey::Chloride,
        DailyValueKey::Choline,
    ];

    /// Recommended daily amount, expressed in [`DailyValueKey::unit`]
    pub fn amount(&self) -> f64 {
        match self {
            DailyValueKey::TotalFat => 78.0,
            DailyValueKey::SaturatedFat => 20.0,
            DailyValueKey::Cholesterol => 300.0,
            DailyValueKey::Sodium => 2300.0,
            DailyValueKey::Potassium => 4700.0,
            DailyValueKey::TotalCarbohydrate => 275.0,
            DailyValueKey::DietaryFiber => 28.0,
            DailyValueKey::Protein => 50.0,
            DailyValueKey::VitaminA => 900.0,
            DailyValueKey::VitaminC => 90.0,
            DailyValueKey::VitaminD => 20.0,
            DailyValueKey::VitaminE => 15.0,
            DailyValueKey::VitaminK => 120.0,
            DailyValueKey::Thiamin => 1.2,
            DailyValueKey::Riboflavin => 1.3,
            DailyValueKey::Niacin => 16.0,
            DailyValueKey::VitaminB6 => 1.7,
            DailyValueKey::Folate => 400.0,
            DailyValueKey::VitaminB12 => 2.4,
            DailyValueKey::Biotin => 30.0,
            DailyValueKey::PantothenicAcid => 5.0,
            DailyValueKey::Calcium => 1300.0,
            DailyValueKey::Iron => 18.0,
            DailyValueKey::Phosphorus => 1250.0,
            DailyValueKey::Iodine => 150.0,
            DailyValueKey::Magnesium => 420.0,
            DailyValueKey::Zinc => 11.0,
            DailyValueKey::Selenium => 55.0,
            DailyValueKey::Copper => 0.9,
            DailyValueKey::Manganese => 2.3,
            DailyValueKey::Chromium => 35.0,
            DailyValueKey::Molybdenum => 45.0,
            DailyValueKey::Chloride => 2300.0,
            DailyValueKey::Choline => 550.0,
        }
    }

    /// Display unit of the reference amount
    pub fn unit(&self) -> DisplayUnit {
        use DisplayUnit::{Grams, Micrograms, Milligrams};

        match self {
            DailyValueKey::TotalFat
            | DailyValueKey::SaturatedFat
            | DailyValueKey::TotalCarbohydrate
            | DailyValueKey::DietaryFiber
            | DailyValueKey::Protein => Grams,

            DailyValueKey::VitaminA
            | DailyValueKey::VitaminD
            | DailyValueKey::VitaminK
            | DailyValueKey::Folate
            | DailyValueKey::VitaminB12
            | DailyValueKey::Biotin
            | DailyValueKey::Iodine
            | DailyValueKey::Selenium
            | DailyValueKey::Chromium
            | DailyValueKey::Molybdenum => Micrograms,

            _ => Milligrams,
        }
    }

    /// Table identifier, e.g. `totalFat`
    pub fn name(&self) -> &'static str {
        match self {
            DailyValueKey::TotalFat => "totalFat",
            DailyValueKey::SaturatedFat => "saturatedFat",
            DailyValueKey::Cholesterol => "cholesterol",
            DailyValueKey::Sodium => "sodium",
            DailyValueKey::Potassium => "potassium",
            DailyValueKey::TotalCarbohydrate => "totalCarbohydrate",
            DailyValueKey::DietaryFiber => "dietaryFiber",
            DailyValueKey::Protein => "protein",
            DailyValueKey::VitaminA => "vitaminA",
            DailyValueKey::VitaminC => "vitaminC",
            DailyValueKey::VitaminD => "vitaminD",
            DailyValueKey::VitaminE => "vitaminE",
            DailyValueKey::VitaminK => "vitaminK",
            DailyValueKey::Thiamin => "thiamin",
            DailyValueKey::Riboflavin => "riboflavin",
            DailyValueKey::Niacin => "niacin",
            DailyValueKey::VitaminB6 => "vitaminB6",
            DailyValueKey::Folate => "folate",
            DailyValueKey::VitaminB12 => "vitaminB12",
            DailyValueKey::Biotin => "biotin",
            DailyValueKey::PantothenicAcid => "pantothenicAcid",
            DailyValueKey::Calcium => "calcium",
            DailyValueKey::Iron => "iron",
            DailyValueKey::Phosphorus => "phosphorus",
            DailyValueKey::Iodine => "iodine",
            DailyValueKey::Magnesium => "magnesium",
            DailyValueKey::Zinc => "zinc",
            DailyValueKey::Selenium => "selenium",
            DailyValueKey::Copper => "copper",
            DailyValueKey::Manganese => "manganese",
            DailyValueKey::Chromium => "chromium",
            DailyValueKey::Molybdenum => "molybdenum",
            DailyValueKey::Chloride => "chloride",
            DailyValueKey::Choline => "choline",
        }
    }
}

/// What a raw nutrient key maps to in the DRV table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutrientMapping {
    /// Evaluated against this DRV entry
    Reference(DailyValueKey),
    /// Known nutrient that is shown without a %DV (energy, sugars)
    NoDailyValue,
}

impl NutrientMapping {
    pub fn daily_value_key(&self) -> Option<DailyValueKey> {
        match self {
            NutrientMapping::Reference(key) => Some(*key),
            NutrientMapping::NoDailyValue => None,
        }
    }
}

use DailyValueKey as K;
use NutrientMapping::{NoDailyValue, Reference};

/// Food-database nutrient keys (per 100g), in display order
pub static NUTRIENT_DV_MAPPING: &[(&str, NutrientMapping)] = &[
    ("energy_kcal_100g", NoDailyValue),
    // Macronutrients
    ("fat_100g", Reference(K::TotalFat)),
    ("saturated-fat_100g", Reference(K::SaturatedFat)),
    ("cholesterol_100g", Reference(K::Cholesterol)),
    ("sodium_100g", Reference(K::Sodium)),
    ("potassium_100g", Reference(K::Potassium)),
    ("carbohydrates_100g", Reference(K::TotalCarbohydrate)),
    ("fiber_100g", Reference(K::DietaryFiber)),
    ("proteins_100g", Reference(K::Protein)),
    ("sugars_100g", NoDailyValue),
    // Salt is evaluated through its sodium equivalent
    ("salt_100g", Reference(K::Sodium)),
    // Vitamins
    ("vitamin-a_100g", Reference(K::VitaminA)),
    ("vitamin-c_100g", Reference(K::VitaminC)),
    ("vitamin-d_100g", Reference(K::VitaminD)),
    ("vitamin-e_100g", Reference(K::VitaminE)),
    ("vitamin-k_100g", Reference(K::VitaminK)),
    ("vitamin-b1_100g", Reference(K::Thiamin)),
    ("vitamin-b2_100g", Reference(K::Riboflavin)),
    ("vitamin-b3_100g", Reference(K::Niacin)),
    ("vitamin-b6_100g", Reference(K::VitaminB6)),
    ("folates_100g", Reference(K::Folate)),
    ("vitamin-b12_100g", Reference(K::VitaminB12)),
    ("biotin_100g", Reference(K::Biotin)),
    ("pantothenic-acid_100g", Reference(K::PantothenicAcid)),
    // Minerals
    ("calcium_100g", Reference(K::Calcium)),
    ("iron_100g", Reference(K::Iron)),
    ("phosphorus_100g", Reference(K::Phosphorus)),
    ("iodine_100g", Reference(K::Iodine)),
    ("magnesium_100g", Reference(K::Magnesium)),
    ("zinc_100g", Reference(K::Zinc)),
    ("selenium_100g", Reference(K::Selenium)),
    ("copper_100g", Reference(K::Copper)),
    ("manganese_100g", Reference(K::Manganese)),
    ("chromium_100g", Reference(K::Chromium)),
    ("molybdenum_100g", Reference(K::Molybdenum)),
    ("chloride_100g", Reference(K::Chloride)),
    ("choline_100g", Reference(K::Choline)),
];

/// Look up a nutrient key; `None` means the key is unknown
pub fn nutrient_mapping(nutrient_key: &str) -> Option<NutrientMapping> {
    NUTRIENT_DV_MAPPING
        .iter()
        .find(|(key, _)| *key == nutrient_key)
        .map(|(_, mapping)| *mapping)
}

/// Position of a key in [`NUTRIENT_DV_MAPPING`], used for display ordering
pub fn display_rank(nutrient_key: &str) -> Option<usize> {
    NUTRIENT_DV_MAPPING
        .iter()
        .position(|(key, _)| *key == nutrient_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_amounts_positive() {
        for key in DailyValueKey::ALL {
            assert!(key.amount() > 0.0, "{} has non-positive DV", key.name());
        }
    }

    #[test]
    fn test_all_covers_every_key_once() {
        let names: HashSet<_> = DailyValueKey::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), DailyValueKey::ALL.len());
    }

    #[test]
    fn test_reference_amounts() {
        assert_eq!(DailyValueKey::Protein.amount(), 50.0);
        assert_eq!(DailyValueKey::TotalFat.amount(), 78.0);
        assert_eq!(DailyValueKey::DietaryFiber.amount(), 28.0);
        assert_eq!(DailyValueKey::Sodium.amount(), 2300.0);
        assert_eq!(DailyValueKey::Copper.amount(), 0.9);
    }

    #[test]
    fn test_reference_units() {
        assert_eq!(DailyValueKey::Protein.unit(), DisplayUnit::Grams);
        assert_eq!(DailyValueKey::Sodium.unit(), DisplayUnit::Milligrams);
        assert_eq!(DailyValueKey::VitaminA.unit(), DisplayUnit::Micrograms);
        assert_eq!(DailyValueKey::Iodine.unit(), DisplayUnit::Micrograms);
        assert_eq!(DailyValueKey::Choline.unit(), DisplayUnit::Milligrams);
    }

    #[test]
    fn test_serde_name_matches_table_name() {
        for key in DailyValueKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.name()));
        }
    }

    #[test]
    fn test_mapping_lookup() {
        assert_eq!(
            nutrient_mapping("fat_100g"),
            Some(NutrientMapping::Reference(DailyValueKey::TotalFat))
        );
        assert_eq!(nutrient_mapping("sugars_100g"), Some(NutrientMapping::NoDailyValue));
        assert_eq!(nutrient_mapping("energy_kcal_100g"), Some(NutrientMapping::NoDailyValue));
        assert_eq!(nutrient_mapping("unobtainium_100g"), None);
    }

    #[test]
    fn test_salt_routes_to_sodium() {
        assert_eq!(
            nutrient_mapping("salt_100g"),
            nutrient_mapping("sodium_100g")
        );
    }

    #[test]
    fn test_mapping_keys_unique() {
        let keys: HashSet<_> = NUTRIENT_DV_MAPPING.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), NUTRIENT_DV_MAPPING.len());
    }

    #[test]
    fn test_display_rank() {
        assert_eq!(display_rank("energy_kcal_100g"), Some(0));
        assert_eq!(display_rank("fat_100g"), Some(1));
        assert_eq!(display_rank("nope"), None);
    }
}
