use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use anyhow::{anyhow, Result};

use crate::domain::{AqiRecord, Reading, Station};

use super::air_repository::{sort_readings, sort_records, sort_stations, AirRepository};

#[derive(Default)]
struct Tables {
    stations: HashMap<String, Station>,
    readings: HashMap<String, Reading>,
    records: HashMap<String, AqiRecord>,
}

/// In-memory implementation of AirRepository for testing.
#[derive(Default)]
pub struct InMemoryRepository {
    tables: Mutex<Tables>,
}

impl InMemoryRepository {
    /// Create a new empty InMemoryRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new InMemoryRepository with pre-populated stations.
    pub fn with_stations(stations: Vec<Station>) -> Self {
        let repo = Self::new();
        if let Ok(mut tables) = repo.tables.lock() {
            for station in stations {
                tables.stations.insert(station.id.clone(), station);
            }
        }
        repo
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| anyhow!("in-memory repository lock poisoned"))
    }
}

impl AirRepository for InMemoryRepository {
    fn load_station(&self, id: &str) -> Result<Option<Station>> {
        Ok(self.tables()?.stations.get(id).cloned())
    }

    fn save_station(&self, station: &Station) -> Result<()> {
        self.tables()?
            .stations
            .insert(station.id.clone(), station.clone());
        Ok(())
    }

    fn list_stations(&self) -> Result<Vec<Station>> {
        let mut stations: Vec<Station> = self.tables()?.stations.values().cloned().collect();
        sort_stations(&mut stations);
        Ok(stations)
    }

    fn load_reading(&self, id: &str) -> Result<Option<Reading>> {
        Ok(self.tables()?.readings.get(id).cloned())
    }

    fn save_reading(&self, reading: &Reading) -> Result<()> {
        self.tables()?
            .readings
            .insert(reading.id.clone(), reading.clone());
        Ok(())
    }

    fn list_readings(&self) -> Result<Vec<Reading>> {
        let mut readings: Vec<Reading> = self.tables()?.readings.values().cloned().collect();
        sort_readings(&mut readings);
        Ok(readings)
    }

    fn delete_reading(&self, id: &str) -> Result<()> {
        self.tables()?.readings.remove(id);
        Ok(())
    }

    fn save_record(&self, record: &AqiRecord) -> Result<()> {
        self.tables()?
            .records
            .insert(record.id.clone(), record.clone());
        Ok(())
    }

    fn list_records(&self) -> Result<Vec<AqiRecord>> {
        let mut records: Vec<AqiRecord> = self.tables()?.records.values().cloned().collect();
        sort_records(&mut records);
        Ok(records)
    }
}
