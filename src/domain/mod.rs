//! Domain entities and the pure functions that guard them.
//!
//! Nothing here touches storage: stations, readings and AQI records are plain
//! serde values, and validation/payload parsing are side-effect free.

pub mod payload;
pub mod reading;
pub mod record;
pub mod station;
pub mod validation;

pub use payload::extract_pm10;
pub use reading::{NewReading, Reading};
pub use record::AqiRecord;
pub use station::{NewStation, Station, StationUpdate};
