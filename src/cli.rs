//! CLI argument definitions for airaware.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::cmd::ui::OutputMode;

#[derive(Parser)]
#[command(name = "airaware")]
#[command(version)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_SHA"),
    ", built ",
    env!("BUILD_DATE"),
    ")"
))]
#[command(about = "Air Quality Index for monitoring stations", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    airaware init\n    airaware station add --name Harbor --lat 37.8 --lon -122.4\n    airaware reading add --station <ID> --pm25 35.5 --pm10 154"
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub json: bool,

    /// Log operations to stderr (at least debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Data directory (overrides storage.data_dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// API key presented when auth.required is set
    #[arg(long, global = true, env = "AIRAWARE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize airaware in the current directory
    Init {
        /// Overwrite an existing .airaware/config.yaml
        #[arg(long)]
        force: bool,
    },
    /// Manage monitoring stations
    Station {
        #[command(subcommand)]
        command: StationCommands,
    },
    /// Ingest and inspect readings
    Reading {
        #[command(subcommand)]
        command: ReadingCommands,
    },
    /// Calculate the AQI for concentrations without storing anything
    Aqi {
        /// PM2.5 concentration in µg/m³
        #[arg(long, allow_negative_numbers = true)]
        pm25: f64,
        /// PM10 concentration in µg/m³ (treated as 0 when omitted)
        #[arg(long, allow_negative_numbers = true)]
        pm10: Option<f64>,
    },
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum StationCommands {
    /// Register a station
    Add(StationAddArgs),
    /// List stations
    List,
    /// Show station details
    Show {
        /// Station ID
        id: String,
    },
    /// Update station fields; omitted fields are left unchanged
    Update(StationUpdateArgs),
    /// Show the latest AQI computed for a station
    Aqi {
        /// Station ID
        id: String,
    },
}

#[derive(Args)]
pub struct StationAddArgs {
    /// Station name
    #[arg(long)]
    pub name: String,
    /// Latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,
    /// Longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,
    /// Sensor provider
    #[arg(long)]
    pub provider: Option<String>,
    /// Free-form metadata
    #[arg(long)]
    pub metadata: Option<String>,
}

#[derive(Args)]
pub struct StationUpdateArgs {
    /// Station ID
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,
    #[arg(long)]
    pub provider: Option<String>,
    #[arg(long)]
    pub metadata: Option<String>,
    /// Mark the station active or inactive
    #[arg(long)]
    pub active: Option<bool>,
}

#[derive(Subcommand)]
pub enum ReadingCommands {
    /// Store a reading and compute its AQI
    Add {
        /// Station the reading belongs to
        #[arg(long)]
        station: String,
        /// PM2.5 concentration in µg/m³
        #[arg(long, allow_negative_numbers = true)]
        pm25: f64,
        /// PM10 concentration in µg/m³
        #[arg(long, allow_negative_numbers = true)]
        pm10: Option<f64>,
        /// Raw provider JSON; PM10 is taken from it when --pm10 is omitted
        #[arg(long, value_name = "JSON")]
        payload: Option<String>,
    },
    /// List readings
    List {
        /// Only readings of this station
        #[arg(long)]
        station: Option<String>,
    },
    /// Show a reading and its AQI record
    Show {
        /// Reading ID
        id: String,
    },
}
