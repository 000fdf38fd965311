//! Monitoring station entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id;

/// A monitoring station that readings are reported against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Who operates the sensor, e.g. "purpleair"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Free-form provider metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

/// Fields supplied when registering a station.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewStation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub provider: Option<String>,
    pub metadata: Option<String>,
}

/// Partial update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationUpdate {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub provider: Option<String>,
    pub metadata: Option<String>,
    pub active: Option<bool>,
}

impl Station {
    /// Build a new, active station with a fresh ID.
    pub fn new(input: NewStation) -> Self {
        Self {
            id: id::generate_id(id::STATION_PREFIX),
            name: input.name,
            latitude: input.latitude,
            longitude: input.longitude,
            provider: input.provider,
            metadata: input.metadata,
            active: true,
            created_at: Utc::now(),
        }
    }

    /// Apply the fields present in `update`.
    pub fn apply(&mut self, update: StationUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(latitude) = update.latitude {
            self.latitude = latitude;
        }
        if let Some(longitude) = update.longitude {
            self.longitude = longitude;
        }
        if let Some(provider) = update.provider {
            self.provider = Some(provider);
        }
        if let Some(metadata) = update.metadata {
            self.metadata = Some(metadata);
        }
        if let Some(active) = update.active {
            self.active = active;
        }
    }
}

impl StationUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
