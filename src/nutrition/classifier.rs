//! %DV tier classification
//!
//! Maps a percentage onto the 5%/20% labelling convention: 5% DV or less is
//! low, 20% DV or more is high. Lower bounds are inclusive.

use serde::{Deserialize, Serialize};

/// Qualitative band a %DV falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DvTier {
    High,
    Good,
    Moderate,
    Low,
}

impl DvTier {
    /// Classify a percentage; total over all reals, NaN lands in `Low`
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 20.0 {
            DvTier::High
        } else if percentage >= 10.0 {
            DvTier::Good
        } else if percentage >= 5.0 {
            DvTier::Moderate
        } else {
            DvTier::Low
        }
    }

    /// Progress bar colour
    pub fn color(&self) -> &'static str {
        match self {
            DvTier::High => "#10B981",     // green
            DvTier::Good => "#3B82F6",     // blue
            DvTier::Moderate => "#F59E0B", // yellow
            DvTier::Low => "#6B7280",      // gray
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DvTier::High => "High",
            DvTier::Good => "Good",
            DvTier::Moderate => "Moderate",
            DvTier::Low => "Low",
        }
    }
}

pub fn classify_dv_color(percentage: f64) -> &'static str {
    DvTier::from_percentage(percentage).color()
}

pub fn classify_dv_label(percentage: f64) -> &'static str {
    DvTier::from_percentage(percentage).label()
}

/// Progress bar fill, the percentage clamped to 0..=100
pub fn bar_fill(percentage: f64) -> f64 {
    if percentage.is_nan() {
        return 0.0;
    }
    percentage.clamp(0.0, 100.0)
}
