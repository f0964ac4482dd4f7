//! Data models
//!
//! Product records consumed by the evaluator and the panel it produces.

mod nutriments;
mod panel;
mod product;

pub use nutriments::Nutriments;
pub use panel::{NutrientRow, NutritionPanel, ProductReport};
pub use product::{NutriScore, Product};
