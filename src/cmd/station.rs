//! Station commands.

use anyhow::Result;

use airaware::domain::{NewStation, StationUpdate};
use airaware::operations;

use super::ui::format;
use super::Context;
use crate::cli::{StationAddArgs, StationUpdateArgs};

pub fn cmd_station_add(ctx: &Context, args: StationAddArgs) -> Result<()> {
    let station = operations::create_station(
        &ctx.repo,
        NewStation {
            name: args.name,
            latitude: args.lat,
            longitude: args.lon,
            provider: args.provider,
            metadata: args.metadata,
        },
    )?;

    ctx.output.success(&format!("Created station {}", station.id));
    for line in format::station_details(&station) {
        ctx.output.detail(&line);
    }
    ctx.output.value(&station)
}

pub fn cmd_station_list(ctx: &Context) -> Result<()> {
    let stations = operations::list_stations(&ctx.repo)?;

    if stations.is_empty() {
        ctx.output.info("No stations registered.");
    }
    for station in &stations {
        ctx.output.info(&format::station_line(station));
    }
    ctx.output.value(&stations)
}

pub fn cmd_station_show(ctx: &Context, id: &str) -> Result<()> {
    let station = operations::get_station(&ctx.repo, id)?;

    ctx.output.info(&station.id);
    for line in format::station_details(&station) {
        ctx.output.detail(&line);
    }
    ctx.output.value(&station)
}

pub fn cmd_station_update(ctx: &Context, args: StationUpdateArgs) -> Result<()> {
    let update = StationUpdate {
        name: args.name,
        latitude: args.lat,
        longitude: args.lon,
        provider: args.provider,
        metadata: args.metadata,
        active: args.active,
    };
    if update.is_empty() {
        ctx.output.warn("Nothing to update; pass at least one field.");
    }

    let station = operations::update_station(&ctx.repo, &args.id, update)?;

    ctx.output.success(&format!("Updated station {}", station.id));
    for line in format::station_details(&station) {
        ctx.output.detail(&line);
    }
    ctx.output.value(&station)
}

pub fn cmd_station_aqi(ctx: &Context, id: &str) -> Result<()> {
    let latest = operations::latest_aqi(&ctx.repo, id)?;
    let color = ctx.color();

    ctx.output.info(&format!(
        "Latest AQI for {}: {}",
        id,
        format::aqi_value(latest.record.aqi_value, latest.record.category, color)
    ));
    for line in format::record_details(&latest.record, color) {
        ctx.output.detail(&line);
    }
    ctx.output.detail(&format!(
        "reading: {} ({})",
        latest.reading.id,
        format::concentrations(&latest.reading)
    ));
    ctx.output.value(&latest)
}
