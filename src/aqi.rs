//! Air Quality Index computation for particulate matter.
//!
//! Maps PM2.5 and PM10 concentrations (µg/m³) onto the US EPA AQI scale by
//! piecewise-linear interpolation over fixed breakpoint tables, and combines
//! the two pollutant results into a final index by taking the worse of them.
//!
//! Every function here is total: negative input clamps to the bottom of the
//! scale, input past the last breakpoint (and NaN) saturates at 500.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Health-risk category attached to an AQI range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AqiCategory {
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "Unhealthy for Sensitive Groups")]
    UnhealthyForSensitiveGroups,
    #[serde(rename = "Unhealthy")]
    Unhealthy,
    #[serde(rename = "Very Unhealthy")]
    VeryUnhealthy,
    #[serde(rename = "Hazardous")]
    Hazardous,
}

impl AqiCategory {
    /// The published label, e.g. `"Unhealthy for Sensitive Groups"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pollutant an [`AqiResult`] was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pollutant {
    #[serde(rename = "PM2.5")]
    Pm25,
    #[serde(rename = "PM10")]
    Pm10,
}

impl Pollutant {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pm25 => "PM2.5",
            Self::Pm10 => "PM10",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a breakpoint table.
///
/// Concentrations in `[c_low, c_high]` (inclusive) map linearly onto
/// `[i_low, i_high]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub c_low: f64,
    pub c_high: f64,
    pub i_low: i32,
    pub i_high: i32,
    pub category: AqiCategory,
}

impl Breakpoint {
    const fn new(c_low: f64, c_high: f64, i_low: i32, i_high: i32, category: AqiCategory) -> Self {
        Self {
            c_low,
            c_high,
            i_low,
            i_high,
            category,
        }
    }

    fn contains(&self, concentration: f64) -> bool {
        concentration >= self.c_low && concentration <= self.c_high
    }

    fn interpolate(&self, concentration: f64) -> i32 {
        let i_high = f64::from(self.i_high);
        let i_low = f64::from(self.i_low);
        let index =
            (i_high - i_low) / (self.c_high - self.c_low) * (concentration - self.c_low) + i_low;
        // f64::round already rounds half away from zero
        index.round() as i32
    }
}

use AqiCategory::*;

/// EPA breakpoints for 24-hour PM2.5.
pub const PM25_BREAKPOINTS: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 12.0, 0, 50, Good),
    Breakpoint::new(12.1, 35.4, 51, 100, Moderate),
    Breakpoint::new(35.5, 55.4, 101, 150, UnhealthyForSensitiveGroups),
    Breakpoint::new(55.5, 150.4, 151, 200, Unhealthy),
    Breakpoint::new(150.5, 250.4, 201, 300, VeryUnhealthy),
    Breakpoint::new(250.5, 500.4, 301, 500, Hazardous),
];

/// EPA breakpoints for 24-hour PM10.
pub const PM10_BREAKPOINTS: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 54.0, 0, 50, Good),
    Breakpoint::new(55.0, 154.0, 51, 100, Moderate),
    Breakpoint::new(155.0, 254.0, 101, 150, UnhealthyForSensitiveGroups),
    Breakpoint::new(255.0, 354.0, 151, 200, Unhealthy),
    Breakpoint::new(355.0, 424.0, 201, 300, VeryUnhealthy),
    Breakpoint::new(425.0, 504.0, 301, 500, Hazardous),
];

/// Index value and category for a single pollutant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AqiResult {
    pub value: i32,
    pub category: AqiCategory,
    pub pollutant: Pollutant,
}

/// Per-pollutant results together with the final (worst) one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AqiCalculation {
    #[serde(rename = "final")]
    pub overall: AqiResult,
    pub pm25: AqiResult,
    pub pm10: AqiResult,
}

/// Anything carrying particulate concentrations.
///
/// PM10 is optional; an absent value is calculated as 0.
pub trait Concentrations {
    fn pm25(&self) -> f64;
    fn pm10(&self) -> Option<f64>;
}

impl Concentrations for (f64, Option<f64>) {
    fn pm25(&self) -> f64 {
        self.0
    }

    fn pm10(&self) -> Option<f64> {
        self.1
    }
}

/// Calculate the PM2.5 sub-index.
pub fn calculate_for_pm25(concentration: f64) -> AqiResult {
    calculate_from_breakpoints(concentration, &PM25_BREAKPOINTS, Pollutant::Pm25)
}

/// Calculate the PM10 sub-index.
pub fn calculate_for_pm10(concentration: f64) -> AqiResult {
    calculate_from_breakpoints(concentration, &PM10_BREAKPOINTS, Pollutant::Pm10)
}

/// Calculate both sub-indices and pick the higher one as the final AQI.
///
/// Ties go to PM2.5.
pub fn calculate<R: Concentrations + ?Sized>(reading: &R) -> AqiCalculation {
    combine(
        calculate_for_pm25(reading.pm25()),
        calculate_for_pm10(reading.pm10().unwrap_or(0.0)),
    )
}

fn combine(pm25: AqiResult, pm10: AqiResult) -> AqiCalculation {
    let overall = if pm25.value >= pm10.value { pm25 } else { pm10 };
    AqiCalculation {
        overall,
        pm25,
        pm10,
    }
}

fn calculate_from_breakpoints(
    concentration: f64,
    table: &[Breakpoint],
    pollutant: Pollutant,
) -> AqiResult {
    let result = |value, category| AqiResult {
        value,
        category,
        pollutant,
    };

    if let Some(bp) = table.iter().find(|b| b.contains(concentration)) {
        return result(bp.interpolate(concentration), bp.category);
    }

    let first = &table[0];
    if concentration < first.c_low {
        return result(first.i_low, first.category);
    }

    // Between two rows: snap to the bottom of the next row up.
    if let Some(next) = table.iter().find(|b| concentration < b.c_low) {
        return result(next.i_low, next.category);
    }

    // Above the table, or NaN.
    let last = &table[table.len() - 1];
    result(last.i_high, last.category)
}

/// Seam for injecting the AQI computation into the operations layer.
pub trait AqiCalculator {
    fn calculate_for_pm25(&self, concentration: f64) -> AqiResult;

    fn calculate_for_pm10(&self, concentration: f64) -> AqiResult;

    fn calculate(&self, reading: &dyn Concentrations) -> AqiCalculation {
        combine(
            self.calculate_for_pm25(reading.pm25()),
            self.calculate_for_pm10(reading.pm10().unwrap_or(0.0)),
        )
    }
}

/// The US EPA breakpoint calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct EpaAqiCalculator;

impl AqiCalculator for EpaAqiCalculator {
    fn calculate_for_pm25(&self, concentration: f64) -> AqiResult {
        calculate_for_pm25(concentration)
    }

    fn calculate_for_pm10(&self, concentration: f64) -> AqiResult {
        calculate_for_pm10(concentration)
    }

    fn calculate(&self, reading: &dyn Concentrations) -> AqiCalculation {
        calculate(reading)
    }
}
