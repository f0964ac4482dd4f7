//! Edible nutrition evaluator
//!
//! Turns per-100g nutrient measurements from a food database into percent
//! daily values, display units, and label tiers.

pub mod build_info;
pub mod error;
pub mod models;
pub mod nutrition;

pub use error::{EvalError, EvalResult};
