//! Latest AQI lookup for a station.

use anyhow::Result;
use serde::Serialize;

use crate::domain::{AqiRecord, Reading};
use crate::repository::AirRepository;

use super::{reading, station, OperationError};

/// The newest AQI record for a station and the reading it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestAqi {
    #[serde(flatten)]
    pub record: AqiRecord,
    pub reading: Reading,
}

/// Find the most recently computed AQI record for `station_id`.
///
/// Records computed at the same instant are ordered by their reading's
/// `created_at`. Unknown stations and stations without records fail with distinct
/// [`OperationError`] variants.
pub fn latest_aqi(repo: &dyn AirRepository, station_id: &str) -> Result<LatestAqi> {
    station::get_station(repo, station_id)?;

    let records = repo.records_for_station(station_id)?;
    let Some(newest) = records.iter().map(|r| r.computed_at).max() else {
        tracing::warn!(operation = "latest_aqi", station_id = %station_id, "no AQI records");
        return Err(OperationError::NoAqiRecords(station_id.to_string()).into());
    };

    let mut latest: Option<(AqiRecord, Reading)> = None;
    for record in records.into_iter().filter(|r| r.computed_at == newest) {
        let reading = reading::get_reading(repo, &record.reading_id)?;
        let newer = latest
            .as_ref()
            .map_or(true, |(_, current)| reading.created_at > current.created_at);
        if newer {
            latest = Some((record, reading));
        }
    }
    let Some((record, reading)) = latest else {
        return Err(OperationError::NoAqiRecords(station_id.to_string()).into());
    };

    tracing::info!(
        operation = "latest_aqi",
        station_id = %station_id,
        aqi = record.aqi_value,
        category = %record.category,
        "latest AQI"
    );

    Ok(LatestAqi { record, reading })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aqi::{AqiCategory, EpaAqiCalculator};
    use crate::domain::{NewReading, NewStation};
    use crate::operations::{create_reading, create_station};
    use crate::repository::InMemoryRepository;
    use chrono::Utc;

    fn station(repo: &InMemoryRepository) -> String {
        create_station(
            repo,
            NewStation {
                name: "Latest".to_string(),
                latitude: 0.0,
                longitude: 0.0,
                ..Default::default()
            },
        )
        .unwrap()
        .id
    }

    fn ingest(repo: &InMemoryRepository, station_id: &str, pm25: f64) -> String {
        create_reading(
            repo,
            &EpaAqiCalculator,
            NewReading {
                station_id: station_id.to_string(),
                pm25,
                ..Default::default()
            },
        )
        .unwrap()
        .reading
        .id
    }

    #[test]
    fn test_latest_is_newest_record() {
        let repo = InMemoryRepository::new();
        let id = station(&repo);
        ingest(&repo, &id, 5.0);
        std::thread::sleep(std::time::Duration::from_millis(5));
        let newest = ingest(&repo, &id, 160.0);

        let latest = latest_aqi(&repo, &id).unwrap();
        assert_eq!(latest.reading.id, newest);
        assert_eq!(latest.record.reading_id, newest);
        assert_eq!(latest.record.category, AqiCategory::VeryUnhealthy);
    }

    #[test]
    fn test_latest_ignores_other_stations() {
        let repo = InMemoryRepository::new();
        let a = station(&repo);
        let b = station(&repo);
        ingest(&repo, &a, 5.0);
        std::thread::sleep(std::time::Duration::from_millis(5));
        ingest(&repo, &b, 300.0);

        assert_eq!(latest_aqi(&repo, &a).unwrap().record.aqi_value, 21);
    }

    #[test]
    fn test_no_records() {
        let repo = InMemoryRepository::new();
        let id = station(&repo);
        let err = latest_aqi(&repo, &id).unwrap_err();
        assert_eq!(
            err.downcast_ref::<OperationError>(),
            Some(&OperationError::NoAqiRecords(id))
        );
    }

    #[test]
    fn test_unknown_station() {
        let repo = InMemoryRepository::new();
        let err = latest_aqi(&repo, "stn-20261019-nothere").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<OperationError>(),
            Some(OperationError::StationNotFound(_))
        ));
    }

    #[test]
    fn test_serializes_flat_with_reading() {
        let repo = InMemoryRepository::new();
        let id = station(&repo);
        ingest(&repo, &id, 40.0);

        let json = serde_json::to_value(latest_aqi(&repo, &id).unwrap()).unwrap();
        assert_eq!(json["aqi_value"], 112);
        assert_eq!(json["category"], "Unhealthy for Sensitive Groups");
        assert_eq!(json["reading"]["pm25"], 40.0);
    }

    #[test]
    fn test_same_computed_at_prefers_newer_reading() {
        let repo = InMemoryRepository::new();
        let id = station(&repo);
        let older = ingest(&repo, &id, 5.0);
        std::thread::sleep(std::time::Duration::from_millis(5));
        let newer = ingest(&repo, &id, 160.0);

        // Same instant for both records, with record IDs ordered against the readings
        let tied = InMemoryRepository::with_stations(repo.list_stations().unwrap());
        for reading in repo.list_readings().unwrap() {
            tied.save_reading(&reading).unwrap();
        }
        let computed_at = Utc::now();
        for mut record in repo.list_records().unwrap() {
            record.computed_at = computed_at;
            record.id = if record.reading_id == older {
                "aqi-20261019-zzzzzz".to_string()
            } else {
                "aqi-20261019-000000".to_string()
            };
            tied.save_record(&record).unwrap();
        }

        let latest = latest_aqi(&tied, &id).unwrap();
        assert_eq!(latest.reading.id, newer);
        assert_eq!(latest.record.id, "aqi-20261019-000000");
    }
}
