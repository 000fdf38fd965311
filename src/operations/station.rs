//! Station registry operations.

use anyhow::Result;

use crate::domain::validation::{validate_new_station, validate_station_update};
use crate::domain::{NewStation, Station, StationUpdate};
use crate::repository::AirRepository;

use super::OperationError;

/// Validate and register a new station.
pub fn create_station(repo: &dyn AirRepository, input: NewStation) -> Result<Station> {
    let problems = validate_new_station(&input);
    if !problems.is_empty() {
        tracing::warn!(operation = "create_station", ?problems, "invalid station");
        return Err(OperationError::invalid(problems).into());
    }

    let station = Station::new(input);
    repo.save_station(&station)?;
    tracing::info!(
        operation = "create_station",
        station_id = %station.id,
        name = %station.name,
        "station created"
    );

    Ok(station)
}

/// Apply a partial update to an existing station.
pub fn update_station(
    repo: &dyn AirRepository,
    id: &str,
    update: StationUpdate,
) -> Result<Station> {
    let problems = validate_station_update(&update);
    if !problems.is_empty() {
        tracing::warn!(operation = "update_station", station_id = %id, ?problems, "invalid update");
        return Err(OperationError::invalid(problems).into());
    }

    let mut station = get_station(repo, id)?;
    station.apply(update);
    repo.save_station(&station)?;
    tracing::info!(operation = "update_station", station_id = %id, "station updated");

    Ok(station)
}

/// Load a station or fail with [`OperationError::StationNotFound`].
pub fn get_station(repo: &dyn AirRepository, id: &str) -> Result<Station> {
    match repo.load_station(id)? {
        Some(station) => Ok(station),
        None => {
            tracing::warn!(operation = "get_station", station_id = %id, "station not found");
            Err(OperationError::StationNotFound(id.to_string()).into())
        }
    }
}

pub fn list_stations(repo: &dyn AirRepository) -> Result<Vec<Station>> {
    let stations = repo.list_stations()?;
    tracing::debug!(operation = "list_stations", count = stations.len());
    Ok(stations)
}
