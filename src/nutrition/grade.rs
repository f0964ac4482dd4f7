//! Nutri-Score grade badge
//!
//! Products carry a Nutri-Score letter (A best, E worst), reported either as
//! `nutriscore.grade` or the older `nutrition_grade` field.

use serde::{Deserialize, Serialize};

/// Badge colour for a missing or unrecognised grade
pub const UNGRADED_COLOR: &str = "#9CA3AF";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutriScoreGrade {
    A,
    B,
    C,
    D,
    E,
}

impl NutriScoreGrade {
    /// Parse a grade letter, case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "a" => Some(NutriScoreGrade::A),
            "b" => Some(NutriScoreGrade::B),
            "c" => Some(NutriScoreGrade::C),
            "d" => Some(NutriScoreGrade::D),
            "e" => Some(NutriScoreGrade::E),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NutriScoreGrade::A => "A",
            NutriScoreGrade::B => "B",
            NutriScoreGrade::C => "C",
            NutriScoreGrade::D => "D",
            NutriScoreGrade::E => "E",
        }
    }

    /// Badge colour
    ///
    /// The palette is this crate's own (Tailwind 500 shades); the scanner
    /// app's `text-grade-*` classes define no colours.
    pub fn color(&self) -> &'static str {
        match self {
            NutriScoreGrade::A => "#22C55E", // green
            NutriScoreGrade::B => "#3B82F6", // blue
            NutriScoreGrade::C => "#EAB308", // yellow
            NutriScoreGrade::D => "#F97316", // orange
            NutriScoreGrade::E => "#EF4444", // red
        }
    }
}

/// Badge colour for a raw grade field, gray when absent or unknown
pub fn grade_color(grade: Option<&str>) -> &'static str {
    grade
        .and_then(NutriScoreGrade::parse)
        .map(|g| g.color())
        .unwrap_or(UNGRADED_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(NutriScoreGrade::parse("a"), Some(NutriScoreGrade::A));
        assert_eq!(NutriScoreGrade::parse(" E "), Some(NutriScoreGrade::E));
        assert_eq!(NutriScoreGrade::parse("unknown"), None);
        assert_eq!(NutriScoreGrade::parse(""), None);
    }

    #[test]
    fn test_grade_color() {
        assert_eq!(grade_color(Some("A")), "#22C55E");
        assert_eq!(grade_color(Some("d")), "#F97316");
        assert_eq!(grade_color(Some("not-applicable")), UNGRADED_COLOR);
        assert_eq!(grade_color(None), UNGRADED_COLOR);
    }

    #[test]
    fn test_grades_order_best_first() {
        assert!(NutriScoreGrade::A < NutriScoreGrade::E);
    }
}
