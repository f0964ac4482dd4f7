//! Nutrition facts panel
//!
//! Evaluates every measurement of a product into a display row.

use serde::Serialize;

use super::{Nutriments, Product};
use crate::nutrition::reference::display_rank;
use crate::nutrition::{
    bar_fill, calculate_daily_value, sodium_daily_value_for_salt, validate_measurement,
    DvResult, DvTier, NutriScoreGrade,
};

/// One evaluated nutrient
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientRow {
    pub key: String,
    /// Measured amount per 100g, in `dv.unit`
    pub value: f64,
    #[serde(flatten)]
    pub dv: DvResult,
    pub tier: Option<DvTier>,
}

impl NutrientRow {
    fn evaluate(key: &str, value: f64) -> Self {
        let dv = if key == "salt_100g" {
            sodium_daily_value_for_salt(value)
        } else {
            calculate_daily_value(key, value)
        };
        Self {
            key: key.to_string(),
            value,
            dv,
            tier: dv.percentage().map(DvTier::from_percentage),
        }
    }

    pub fn color(&self) -> Option<&'static str> {
        self.tier.map(|t| t.color())
    }

    pub fn label(&self) -> Option<&'static str> {
        self.tier.map(|t| t.label())
    }

    /// Progress bar width in percent; rows without a DV have no bar
    pub fn bar_fill(&self) -> Option<f64> {
        self.dv.percentage().map(bar_fill)
    }
}

/// Evaluated nutrition panel for one product
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NutritionPanel {
    pub rows: Vec<NutrientRow>,
}

impl NutritionPanel {
    /// Evaluate every valid measurement
    ///
    /// Known nutrients come first in reference-table order, unknown ones after
    /// in lexical order. Negative or non-finite values are dropped.
    pub fn evaluate(nutriments: &Nutriments) -> Self {
        let mut rows: Vec<NutrientRow> = nutriments
            .iter()
            .filter(|(key, value)| match validate_measurement(key, *value) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("Dropping measurement: {}", e);
                    false
                }
            })
            .map(|(key, value)| NutrientRow::evaluate(key, value))
            .collect();

        // stable sort keeps lexical order among unknown keys
        rows.sort_by_key(|row| display_rank(&row.key).unwrap_or(usize::MAX));

        Self { rows }
    }

    pub fn row(&self, key: &str) -> Option<&NutrientRow> {
        self.rows.iter().find(|r| r.key == key)
    }

    /// Rows that have a daily value
    pub fn with_daily_value(&self) -> impl Iterator<Item = &NutrientRow> {
        self.rows.iter().filter(|r| r.dv.has_dv())
    }
}

/// Panel plus product-level badges
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductReport {
    pub code: Option<String>,
    pub product_name: Option<String>,
    pub grade: Option<NutriScoreGrade>,
    /// Badge text, e.g. "E"
    pub grade_label: Option<&'static str>,
    pub grade_color: &'static str,
    pub panel: NutritionPanel,
}

impl ProductReport {
    pub fn evaluate(product: &Product) -> Self {
        Self {
            code: product.code.clone(),
            product_name: product.product_name.clone(),
            grade: product.grade(),
            grade_label: product.grade().map(|g| g.as_str()),
            grade_color: crate::nutrition::grade_color(product.raw_grade()),
            panel: NutritionPanel::evaluate(&product.nutriments),
        }
    }
}
