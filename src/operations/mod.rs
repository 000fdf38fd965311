//! Shared business logic layer for station and reading operations.
//!
//! This module provides the canonical implementation of every operation the
//! CLI exposes, so the command handlers stay thin.

pub mod error;
pub mod latest;
pub mod reading;
pub mod station;

pub use error::OperationError;
pub use latest::{latest_aqi, LatestAqi};
pub use reading::{create_reading, get_reading, list_readings, IngestedReading};
pub use station::{create_station, get_station, list_stations, update_station};
