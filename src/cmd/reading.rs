//! Reading commands.

use anyhow::Result;

use airaware::aqi::EpaAqiCalculator;
use airaware::domain::NewReading;
use airaware::operations;
use airaware::repository::AirRepository;

use super::ui::format;
use super::Context;

pub fn cmd_reading_add(
    ctx: &Context,
    station: String,
    pm25: f64,
    pm10: Option<f64>,
    payload: Option<String>,
) -> Result<()> {
    let ingested = operations::create_reading(
        &ctx.repo,
        &EpaAqiCalculator,
        NewReading {
            station_id: station,
            pm25,
            pm10,
            raw_payload: payload,
        },
    )?;
    let color = ctx.color();

    ctx.output
        .success(&format!("Stored reading {}", ingested.reading.id));
    ctx.output
        .detail(&format::concentrations(&ingested.reading));
    for line in format::record_details(&ingested.record, color) {
        ctx.output.detail(&line);
    }
    ctx.output.value(&ingested)
}

pub fn cmd_reading_list(ctx: &Context, station: Option<&str>) -> Result<()> {
    let readings = operations::list_readings(&ctx.repo, station)?;

    if readings.is_empty() {
        ctx.output.info("No readings found.");
    }
    for reading in &readings {
        ctx.output.info(&format::reading_line(reading));
    }
    ctx.output.value(&readings)
}

pub fn cmd_reading_show(ctx: &Context, id: &str) -> Result<()> {
    let reading = operations::get_reading(&ctx.repo, id)?;
    let record = ctx.repo.find_record_for_reading(&reading.id)?;

    ctx.output.info(&reading.id);
    ctx.output.detail(&format!("station: {}", reading.station_id));
    ctx.output.detail(&format::concentrations(&reading));
    if let Some(payload) = &reading.raw_payload {
        ctx.output.detail(&format!("payload: {}", payload));
    }
    match &record {
        Some(record) => {
            for line in format::record_details(record, ctx.color()) {
                ctx.output.detail(&line);
            }
        }
        None => ctx.output.warn("No AQI record for this reading."),
    }

    ctx.output.value(&serde_json::json!({
        "reading": reading,
        "aqi": record,
    }))
}
