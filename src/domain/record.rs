//! Derived AQI record, one per reading.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aqi::{AqiCalculation, AqiCategory, Pollutant};
use crate::id;

use super::Reading;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AqiRecord {
    pub id: String,
    pub reading_id: String,
    pub station_id: String,
    pub aqi_value: i32,
    pub category: AqiCategory,
    pub pm25_aqi: i32,
    pub pm25_category: AqiCategory,
    pub pm10_aqi: i32,
    pub pm10_category: AqiCategory,
    pub computed_at: DateTime<Utc>,
}

impl AqiRecord {
    /// Capture a calculation for `reading`.
    pub fn from_calculation(reading: &Reading, calc: &AqiCalculation) -> Self {
        Self {
            id: id::generate_id(id::RECORD_PREFIX),
            reading_id: reading.id.clone(),
            station_id: reading.station_id.clone(),
            aqi_value: calc.overall.value,
            category: calc.overall.category,
            pm25_aqi: calc.pm25.value,
            pm25_category: calc.pm25.category,
            pm10_aqi: calc.pm10.value,
            pm10_category: calc.pm10.category,
            computed_at: Utc::now(),
        }
    }

    /// Which pollutant the final value came from. Ties resolve to PM2.5,
    /// matching how the final value is chosen.
    pub fn dominant_pollutant(&self) -> Pollutant {
        if self.aqi_value == self.pm25_aqi && self.category == self.pm25_category {
            Pollutant::Pm25
        } else {
            Pollutant::Pm10
        }
    }
}
