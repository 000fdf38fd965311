//! Pure validation for station and reading input.
//!
//! Each function returns the list of problems found, empty when the input is
//! acceptable. Callers decide whether to fail or warn.

use super::{NewReading, NewStation, StationUpdate};

/// Check the fields of a station registration.
pub fn validate_new_station(input: &NewStation) -> Vec<String> {
    let mut problems = Vec::new();

    if input.name.trim().is_empty() {
        problems.push("name must not be empty".to_string());
    }
    check_latitude(input.latitude, &mut problems);
    check_longitude(input.longitude, &mut problems);

    problems
}

/// Check only the fields an update actually sets.
pub fn validate_station_update(update: &StationUpdate) -> Vec<String> {
    let mut problems = Vec::new();

    if let Some(name) = &update.name {
        if name.trim().is_empty() {
            problems.push("name must not be empty".to_string());
        }
    }
    if let Some(latitude) = update.latitude {
        check_latitude(latitude, &mut problems);
    }
    if let Some(longitude) = update.longitude {
        check_longitude(longitude, &mut problems);
    }

    problems
}

/// Check that concentrations are finite and non-negative.
pub fn validate_new_reading(input: &NewReading) -> Vec<String> {
    let mut problems = Vec::new();

    if input.station_id.trim().is_empty() {
        problems.push("station id must not be empty".to_string());
    }
    check_concentration("pm25", input.pm25, &mut problems);
    if let Some(pm10) = input.pm10 {
        check_concentration("pm10", pm10, &mut problems);
    }

    problems
}

/// Check a concentration pulled out of a raw payload.
pub fn is_valid_concentration(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn check_concentration(field: &str, value: f64, problems: &mut Vec<String>) {
    if !is_valid_concentration(value) {
        problems.push(format!(
            "{} must be a finite, non-negative number, got {}",
            field, value
        ));
    }
}

fn check_latitude(value: f64, problems: &mut Vec<String>) {
    if !(-90.0..=90.0).contains(&value) {
        problems.push(format!("latitude must be within [-90, 90], got {}", value));
    }
}

fn check_longitude(value: f64, problems: &mut Vec<String>) {
    if !(-180.0..=180.0).contains(&value) {
        problems.push(format!("longitude must be within [-180, 180], got {}", value));
    }
}
