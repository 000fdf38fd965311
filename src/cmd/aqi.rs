//! `airaware aqi`: stateless calculation.

use anyhow::Result;

use airaware::aqi;

use super::ui::{format, Output};

pub fn cmd_aqi(pm25: f64, pm10: Option<f64>, output: &Output) -> Result<()> {
    let calc = aqi::calculate(&(pm25, pm10));
    let color = output.is_tty();

    output.info(&format!(
        "AQI {} from {}",
        format::aqi_value(calc.overall.value, calc.overall.category, color),
        calc.overall.pollutant
    ));
    output.detail(&format::aqi_result(&calc.pm25, color));
    output.detail(&format::aqi_result(&calc.pm10, color));
    output.value(&calc)
}
