use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::{AqiRecord, Reading, Station};
use crate::id;

use super::air_repository::{sort_readings, sort_records, sort_stations, AirRepository};

const STATIONS_DIR: &str = "stations";
const READINGS_DIR: &str = "readings";
const RECORDS_DIR: &str = "records";

/// File-based implementation of AirRepository.
///
/// Layout under the data directory:
///
/// ```text
/// stations/<id>.json
/// readings/<id>.json
/// records/<id>.json
/// ```
pub struct FileRepository {
    data_dir: PathBuf,
}

impl FileRepository {
    /// Create a new FileRepository rooted at `data_dir`.
    ///
    /// Directories are created lazily on first write.
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Get the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Create the entity directories up front.
    pub fn init(&self) -> Result<()> {
        for dir in [STATIONS_DIR, READINGS_DIR, RECORDS_DIR] {
            let path = self.data_dir.join(dir);
            fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
        }
        Ok(())
    }

    fn entity_path(&self, dir: &str, id: &str) -> PathBuf {
        self.data_dir.join(dir).join(format!("{}.json", id))
    }

    fn load<T: DeserializeOwned>(&self, dir: &str, prefix: &str, id: &str) -> Result<Option<T>> {
        // Anything not shaped like an ID cannot name a file we wrote.
        if !id::is_valid_id(prefix, id) {
            return Ok(None);
        }
        read_json(&self.entity_path(dir, id))
    }

    fn save<T: Serialize>(&self, dir: &str, id: &str, value: &T) -> Result<()> {
        let dir_path = self.data_dir.join(dir);
        fs::create_dir_all(&dir_path)
            .with_context(|| format!("Failed to create {}", dir_path.display()))?;
        write_json_atomic(&dir_path, &self.entity_path(dir, id), value)
    }

    fn list<T: DeserializeOwned>(&self, dir: &str) -> Result<Vec<T>> {
        let dir_path = self.data_dir.join(dir);
        if !dir_path.exists() {
            return Ok(Vec::new());
        }

        let mut items = Vec::new();
        for entry in fs::read_dir(&dir_path)
            .with_context(|| format!("Failed to read {}", dir_path.display()))?
        {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(item) = read_json(&path)? {
                items.push(item);
            }
        }
        Ok(items)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(Some(value))
}

/// Write through a temp file in the same directory, then rename over `path`.
fn write_json_atomic<T: Serialize>(dir: &Path, path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize entity")?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    tmp.write_all(json.as_bytes())?;
    tmp.write_all(b"\n")?;
    tmp.persist(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

impl AirRepository for FileRepository {
    fn load_station(&self, id: &str) -> Result<Option<Station>> {
        self.load(STATIONS_DIR, id::STATION_PREFIX, id)
    }

    fn save_station(&self, station: &Station) -> Result<()> {
        self.save(STATIONS_DIR, &station.id, station)
    }

    fn list_stations(&self) -> Result<Vec<Station>> {
        let mut stations = self.list(STATIONS_DIR)?;
        sort_stations(&mut stations);
        Ok(stations)
    }

    fn load_reading(&self, id: &str) -> Result<Option<Reading>> {
        self.load(READINGS_DIR, id::READING_PREFIX, id)
    }

    fn save_reading(&self, reading: &Reading) -> Result<()> {
        self.save(READINGS_DIR, &reading.id, reading)
    }

    fn list_readings(&self) -> Result<Vec<Reading>> {
        let mut readings = self.list(READINGS_DIR)?;
        sort_readings(&mut readings);
        Ok(readings)
    }

    fn delete_reading(&self, id: &str) -> Result<()> {
        if !id::is_valid_id(id::READING_PREFIX, id) {
            return Ok(());
        }
        let path = self.entity_path(READINGS_DIR, id);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
        }
    }

    fn save_record(&self, record: &AqiRecord) -> Result<()> {
        self.save(RECORDS_DIR, &record.id, record)
    }

    fn list_records(&self) -> Result<Vec<AqiRecord>> {
        let mut records = self.list(RECORDS_DIR)?;
        sort_records(&mut records);
        Ok(records)
    }
}
