//! CLI entry point and command dispatch for airaware.

mod cli;
mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

use airaware::auth::ApiKeyError;
use airaware::config::Config;
use airaware::logging;
use airaware::operations::OperationError;

use cli::{Cli, Commands, ReadingCommands, StationCommands};
use cmd::ui::Output;
use cmd::Context;

fn main() {
    let cli = Cli::parse();
    let output = Output::new(cli.output_mode());

    if let Err(e) = run(cli, &output) {
        output.error(&format!("{:#}", e));
        std::process::exit(exit_code(&e));
    }
}

fn run(cli: Cli, output: &Output) -> Result<()> {
    let command = match cli.command {
        Commands::Completion { shell } => return cmd_completion(shell),
        command => command,
    };

    let config = Config::load()?;
    logging::init(&config.logging, cli.verbose)?;

    let open = |data_dir| Context::open(&config, data_dir, cli.api_key.as_deref(), output.clone());

    match command {
        Commands::Init { force } => cmd::init::cmd_init(force, cli.data_dir, output),
        Commands::Aqi { pm25, pm10 } => cmd::aqi::cmd_aqi(pm25, pm10, output),
        Commands::Station { command } => {
            let ctx = open(cli.data_dir)?;
            match command {
                StationCommands::Add(args) => cmd::station::cmd_station_add(&ctx, args),
                StationCommands::List => cmd::station::cmd_station_list(&ctx),
                StationCommands::Show { id } => cmd::station::cmd_station_show(&ctx, &id),
                StationCommands::Update(args) => cmd::station::cmd_station_update(&ctx, args),
                StationCommands::Aqi { id } => cmd::station::cmd_station_aqi(&ctx, &id),
            }
        }
        Commands::Reading { command } => {
            let ctx = open(cli.data_dir)?;
            match command {
                ReadingCommands::Add {
                    station,
                    pm25,
                    pm10,
                    payload,
                } => cmd::reading::cmd_reading_add(&ctx, station, pm25, pm10, payload),
                ReadingCommands::List { station } => {
                    cmd::reading::cmd_reading_list(&ctx, station.as_deref())
                }
                ReadingCommands::Show { id } => cmd::reading::cmd_reading_show(&ctx, &id),
            }
        }
        // Returned before config was loaded
        Commands::Completion { shell } => cmd_completion(shell),
    }
}

/// Exit status: 2 for missing entities, 3 for rejected API keys, 1 otherwise.
fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ApiKeyError>().is_some() {
        return 3;
    }
    match err.downcast_ref::<OperationError>() {
        Some(
            OperationError::StationNotFound(_)
            | OperationError::ReadingNotFound(_)
            | OperationError::NoAqiRecords(_),
        ) => 2,
        _ => 1,
    }
}

fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "airaware", &mut io::stdout());
    Ok(())
}
