//! US AQI severity categories (AirNow ranges).

use serde::Serialize;
use std::fmt;

/// Severity tier for an air-quality index reading.
///
/// `Unknown` is not a tier: it marks a record whose AQI was missing or could
/// not be read, and is never produced by [`categorize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    Good,
    Moderate,
    #[serde(rename = "Unhealthy (Sensitive)")]
    UnhealthySensitive,
    Unhealthy,
    #[serde(rename = "Very Unhealthy")]
    VeryUnhealthy,
    Hazardous,
    Unknown,
}

impl Category {
    /// Category for a possibly-missing reading.
    pub fn for_reading(aqi: Option<f64>) -> Self {
        match aqi {
            Some(v) if !v.is_nan() => categorize(v),
            _ => Category::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Good => "Good",
            Category::Moderate => "Moderate",
            Category::UnhealthySensitive => "Unhealthy (Sensitive)",
            Category::Unhealthy => "Unhealthy",
            Category::VeryUnhealthy => "Very Unhealthy",
            Category::Hazardous => "Hazardous",
            Category::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps an AQI value onto one of the six AirNow tiers.
///
/// | Range       | Category              |
/// |-------------|-----------------------|
/// | <= 50       | Good                  |
/// | <= 100      | Moderate              |
/// | <= 150      | Unhealthy (Sensitive) |
/// | <= 200      | Unhealthy             |
/// | <= 300      | Very Unhealthy        |
/// | > 300       | Hazardous             |
///
/// Callers must not pass NaN; use [`Category::for_reading`] for readings that
/// may be missing.
pub fn categorize(aqi: f64) -> Category {
    match aqi {
        a if a <= 50.0 => Category::Good,
        a if a <= 100.0 => Category::Moderate,
        a if a <= 150.0 => Category::UnhealthySensitive,
        a if a <= 200.0 => Category::Unhealthy,
        a if a <= 300.0 => Category::VeryUnhealthy,
        _ => Category::Hazardous,
    }
}
