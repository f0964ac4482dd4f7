//! Nutriments record
//!
//! Per-100g nutrient measurements as reported by the food database.

use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::error::{EvalError, EvalResult};

/// Nutrient key -> amount per 100g
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, RawMeasurement>", into = "BTreeMap<String, f64>")]
pub struct Nutriments {
    values: BTreeMap<String, f64>,
}

/// A field as it appears in the source record; databases mix numbers,
/// numeric strings, nulls, and unrelated metadata in the same object
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMeasurement {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl RawMeasurement {
    fn as_f64(&self) -> Option<f64> {
        match self {
            RawMeasurement::Number(n) => Some(*n),
            RawMeasurement::Text(s) => s.trim().parse().ok(),
            RawMeasurement::Other(_) => None,
        }
    }
}

impl From<BTreeMap<String, RawMeasurement>> for Nutriments {
    fn from(raw: BTreeMap<String, RawMeasurement>) -> Self {
        let values = raw
            .into_iter()
            .filter_map(|(key, raw)| match raw.as_f64() {
                Some(value) => Some((key, value)),
                None => {
                    tracing::debug!("Skipping non-numeric nutriment '{}'", key);
                    None
                }
            })
            .collect();
        Self { values }
    }
}

impl From<Nutriments> for BTreeMap<String, f64> {
    fn from(nutriments: Nutriments) -> Self {
        nutriments.values
    }
}

impl Nutriments {
    /// Decode a JSON object of nutriments
    pub fn from_json_str(json: &str) -> EvalResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    pub fn from_json_value(value: serde_json::Value) -> EvalResult<Self> {
        if !value.is_object() {
            return Err(EvalError::NotAnObject(json_kind(&value)));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Measurements in lexical key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Nutriments {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
