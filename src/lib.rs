//! # AirAware - particulate AQI for monitoring stations
//!
//! AirAware ingests PM2.5/PM10 readings reported by monitoring stations and
//! turns them into US EPA Air Quality Index values.
//!
//! ## Overview
//!
//! The heart of the crate is [`aqi`], a pure, stateless calculator that maps a
//! concentration onto the AQI scale by linear interpolation over fixed
//! breakpoint tables and keeps the worse of the two pollutants. Around it sit
//! a station registry and reading store ([`repository`]), and the operations
//! that tie them together ([`operations`]): every stored reading gets exactly
//! one derived AQI record.
//!
//! ## Modules
//!
//! - [`aqi`] - Breakpoint tables and AQI calculation
//! - [`domain`] - Stations, readings, AQI records and input validation
//! - [`repository`] - Storage trait with file-backed and in-memory backends
//! - [`operations`] - Station/reading operations shared by every front end
//! - [`auth`] - API-key check
//! - [`config`] - Configuration loading and merging
//! - [`logging`] - `tracing` subscriber set-up
//! - [`id`] - Entity ID generation
//!
//! ## Example
//!
//! ```
//! use airaware::aqi::{self, AqiCategory, Pollutant};
//!
//! let pm25 = aqi::calculate_for_pm25(24.0);
//! assert_eq!(pm25.category, AqiCategory::Moderate);
//!
//! // PM2.5 = 12.0 (AQI 50), PM10 = 354 (AQI 200): PM10 dominates
//! let calc = aqi::calculate(&(12.0, Some(354.0)));
//! assert_eq!(calc.overall.value, 200);
//! assert_eq!(calc.overall.pollutant, Pollutant::Pm10);
//! ```

pub mod aqi;
pub mod auth;
pub mod config;
pub mod domain;
pub mod id;
pub mod logging;
pub mod operations;
pub mod repository;

/// Default path constants for the airaware directory structure.
pub mod paths {
    /// Project directory: `.airaware`
    pub const AIRAWARE_DIR: &str = ".airaware";
    /// Project configuration file: `.airaware/config.yaml`
    pub const CONFIG_FILE: &str = ".airaware/config.yaml";
    /// Default data directory: `.airaware/data`
    pub const DATA_DIR: &str = ".airaware/data";
}
