//! Reading ingestion.
//!
//! Storing a reading also derives and stores its AQI record.

use anyhow::Result;
use serde::Serialize;

use crate::aqi::AqiCalculator;
use crate::domain::validation::{is_valid_concentration, validate_new_reading};
use crate::domain::{extract_pm10, AqiRecord, NewReading, Reading};
use crate::repository::AirRepository;

use super::{station, OperationError};

/// A stored reading together with its AQI record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestedReading {
    pub reading: Reading,
    #[serde(rename = "aqi")]
    pub record: AqiRecord,
}

/// Validate, store and score a reading.
///
/// When `pm10` is absent it is looked up in the raw payload. A payload value
/// that is not a valid concentration is ignored.
///
/// The reading is only kept if its record is stored too: a failed record
/// write removes the reading again before the error is returned.
pub fn create_reading(
    repo: &dyn AirRepository,
    calculator: &dyn AqiCalculator,
    input: NewReading,
) -> Result<IngestedReading> {
    let problems = validate_new_reading(&input);
    if !problems.is_empty() {
        tracing::warn!(operation = "create_reading", ?problems, "invalid reading");
        return Err(OperationError::invalid(problems).into());
    }

    tracing::info!(
        operation = "create_reading",
        station_id = %input.station_id,
        pm25 = input.pm25,
        pm10 = ?input.pm10,
        "ingesting reading"
    );

    station::get_station(repo, &input.station_id)?;

    let pm10 = input.pm10.or_else(|| {
        let extracted = input
            .raw_payload
            .as_deref()
            .and_then(extract_pm10)
            .filter(|v| is_valid_concentration(*v));
        if let Some(value) = extracted {
            tracing::info!(
                operation = "create_reading",
                station_id = %input.station_id,
                pm10 = value,
                "extracted PM10 from payload"
            );
        }
        extracted
    });

    let reading = Reading::new(input, pm10);
    let calc = calculator.calculate(&reading);
    tracing::info!(
        reading_id = %reading.id,
        aqi = calc.overall.value,
        category = %calc.overall.category,
        pm25_aqi = calc.pm25.value,
        pm10_aqi = calc.pm10.value,
        "AQI calculated"
    );
    // The reading ID is fresh, so no record can exist for it yet.
    let record = AqiRecord::from_calculation(&reading, &calc);

    repo.save_reading(&reading)?;
    if let Err(e) = repo.save_record(&record) {
        tracing::error!(reading_id = %reading.id, error = %e, "failed to store AQI record");
        if let Err(cleanup) = repo.delete_reading(&reading.id) {
            tracing::error!(reading_id = %reading.id, error = %cleanup, "failed to remove reading");
        }
        return Err(e);
    }
    tracing::debug!(reading_id = %reading.id, record_id = %record.id, "AQI record stored");

    Ok(IngestedReading { reading, record })
}

/// Load a reading or fail with [`OperationError::ReadingNotFound`].
pub fn get_reading(repo: &dyn AirRepository, id: &str) -> Result<Reading> {
    match repo.load_reading(id)? {
        Some(reading) => Ok(reading),
        None => {
            tracing::warn!(operation = "get_reading", reading_id = %id, "reading not found");
            Err(OperationError::ReadingNotFound(id.to_string()).into())
        }
    }
}

/// List readings, optionally only those of one station.
pub fn list_readings(repo: &dyn AirRepository, station_id: Option<&str>) -> Result<Vec<Reading>> {
    let mut readings = repo.list_readings()?;
    if let Some(station_id) = station_id {
        readings.retain(|r| r.station_id == station_id);
    }
    tracing::debug!(operation = "list_readings", count = readings.len());
    Ok(readings)
}
