//! Sensor reading entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aqi::Concentrations;
use crate::id;

/// A particulate reading reported by a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub id: String,
    pub station_id: String,
    /// PM2.5 concentration in µg/m³
    pub pm25: f64,
    /// PM10 concentration in µg/m³, if the sensor reports it
    #[serde(default)]
    pub pm10: Option<f64>,
    /// Raw provider payload, kept verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_payload: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when ingesting a reading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewReading {
    pub station_id: String,
    pub pm25: f64,
    pub pm10: Option<f64>,
    pub raw_payload: Option<String>,
}

impl Reading {
    /// Build a reading with a fresh ID. `pm10` has already been resolved
    /// (possibly from the payload) by the caller.
    pub fn new(input: NewReading, pm10: Option<f64>) -> Self {
        Self {
            id: id::generate_id(id::READING_PREFIX),
            station_id: input.station_id,
            pm25: input.pm25,
            pm10,
            raw_payload: input.raw_payload,
            created_at: Utc::now(),
        }
    }
}

impl Concentrations for Reading {
    fn pm25(&self) -> f64 {
        self.pm25
    }

    fn pm10(&self) -> Option<f64> {
        self.pm10
    }
}
