use anyhow::Result;

use crate::domain::{AqiRecord, Reading, Station};

/// A trait for loading and saving air-quality entities from a storage backend.
///
/// Lookups return `Ok(None)` when the entity does not exist; `Err` is kept for
/// backend failures.
pub trait AirRepository {
    /// Load a station by its ID.
    fn load_station(&self, id: &str) -> Result<Option<Station>>;

    /// Insert or replace a station.
    fn save_station(&self, station: &Station) -> Result<()>;

    /// List all stations, oldest first.
    fn list_stations(&self) -> Result<Vec<Station>>;

    /// Load a reading by its ID.
    fn load_reading(&self, id: &str) -> Result<Option<Reading>>;

    /// Insert or replace a reading.
    fn save_reading(&self, reading: &Reading) -> Result<()>;

    /// List all readings, oldest first.
    fn list_readings(&self) -> Result<Vec<Reading>>;

    /// Remove a reading. Removing one that does not exist is not an error.
    fn delete_reading(&self, id: &str) -> Result<()>;

    /// Insert or replace an AQI record.
    fn save_record(&self, record: &AqiRecord) -> Result<()>;

    /// List all AQI records, oldest computation first.
    fn list_records(&self) -> Result<Vec<AqiRecord>>;

    /// Find the AQI record derived from a reading, if any.
    ///
    /// Scans every record; ingestion never calls it.
    fn find_record_for_reading(&self, reading_id: &str) -> Result<Option<AqiRecord>> {
        Ok(self
            .list_records()?
            .into_iter()
            .find(|r| r.reading_id == reading_id))
    }

    /// All AQI records for a station, oldest computation first.
    fn records_for_station(&self, station_id: &str) -> Result<Vec<AqiRecord>> {
        Ok(self
            .list_records()?
            .into_iter()
            .filter(|r| r.station_id == station_id)
            .collect())
    }
}

pub(super) fn sort_stations(stations: &mut [Station]) {
    stations.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
}

pub(super) fn sort_readings(readings: &mut [Reading]) {
    readings.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
}

pub(super) fn sort_records(records: &mut [AqiRecord]) {
    records.sort_by(|a, b| {
        a.computed_at
            .cmp(&b.computed_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}
