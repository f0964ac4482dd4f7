//! Scanned product record
//!
//! The subset of a food-database product the evaluator reads.

use serde::{Deserialize, Serialize};

use super::Nutriments;
use crate::error::{EvalError, EvalResult};
use crate::nutrition::NutriScoreGrade;

/// Nutri-Score block of a product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutriScore {
    pub grade: Option<String>,
}

/// Top-level fields that mark a document as a product rather than a bare
/// nutriments record
const PRODUCT_FIELDS: [&str; 5] = [
    "code",
    "product_name",
    "nutriments",
    "nutriscore",
    "nutrition_grade",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub nutriments: Nutriments,
    #[serde(default)]
    pub nutriscore: Option<NutriScore>,
    /// Legacy grade field, consulted when `nutriscore.grade` is absent
    #[serde(default)]
    pub nutrition_grade: Option<String>,
}

impl Product {
    /// Decode a product document
    ///
    /// An object carrying none of the product fields is taken to be the
    /// nutriments record itself.
    pub fn from_json_str(json: &str) -> EvalResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let is_product = match &value {
            serde_json::Value::Object(map) => {
                PRODUCT_FIELDS.iter().any(|field| map.contains_key(*field))
            }
            other => return Err(EvalError::NotAnObject(super::nutriments::json_kind(other))),
        };

        if is_product {
            Ok(serde_json::from_value(value)?)
        } else {
            Ok(Self {
                nutriments: Nutriments::from_json_value(value)?,
                ..Self::default()
            })
        }
    }

    /// Raw grade string, preferring `nutriscore.grade`
    pub fn raw_grade(&self) -> Option<&str> {
        self.nutriscore
            .as_ref()
            .and_then(|n| n.grade.as_deref())
            .or(self.nutrition_grade.as_deref())
    }

    pub fn grade(&self) -> Option<NutriScoreGrade> {
        self.raw_grade().and_then(NutriScoreGrade::parse)
    }
}

/// Food databases send `"nutriments": null` for products without data
fn null_as_empty<'de, D>(deserializer: D) -> Result<Nutriments, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Nutriments>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_prefers_nutriscore_block() {
        let product = Product::from_json_str(
            r#"{"nutriscore": {"grade": "b"}, "nutrition_grade": "d", "nutriments": {}}"#,
        )
        .unwrap();
        assert_eq!(product.grade(), Some(NutriScoreGrade::B));
    }

    #[test]
    fn test_grade_falls_back_to_legacy_field() {
        let product =
            Product::from_json_str(r#"{"nutrition_grade": "E", "nutriments": {"fat_100g": 1}}"#)
                .unwrap();
        assert_eq!(product.grade(), Some(NutriScoreGrade::E));
        assert_eq!(product.nutriments.get("fat_100g"), Some(1.0));
    }

    #[test]
    fn test_bare_nutriments_document() {
        let product = Product::from_json_str(r#"{"fat_100g": 3.5, "fat_unit": "g"}"#).unwrap();
        assert_eq!(product.nutriments.get("fat_100g"), Some(3.5));
        assert_eq!(product.nutriments.len(), 1);
        assert_eq!(product.code, None);
    }

    #[test]
    fn test_product_without_nutriments_keeps_product_fields() {
        let product = Product::from_json_str(
            r#"{"code": "3017620422003", "product_name": "Nutella", "nutrition_grade": "e"}"#,
        )
        .unwrap();
        assert_eq!(product.code.as_deref(), Some("3017620422003"));
        assert_eq!(product.product_name.as_deref(), Some("Nutella"));
        assert_eq!(product.grade(), Some(NutriScoreGrade::E));
        assert!(product.nutriments.is_empty());
    }

    #[test]
    fn test_null_nutriments_is_empty() {
        let product = Product::from_json_str(r#"{"code": "1", "nutriments": null}"#).unwrap();
        assert_eq!(product.code.as_deref(), Some("1"));
        assert!(product.nutriments.is_empty());
    }

    #[test]
    fn test_missing_fields_default() {
        let product = Product::from_json_str("{}").unwrap();
        assert!(product.nutriments.is_empty());
        assert_eq!(product.grade(), None);
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(matches!(
            Product::from_json_str("\"abc\""),
            Err(EvalError::NotAnObject("a string"))
        ));
    }
}
