//! Human-readable rendering of stations, readings and AQI results.

use colored::Colorize;

use airaware::aqi::{AqiCategory, AqiResult};
use airaware::domain::{AqiRecord, Reading, Station};

/// Category label in the EPA reporting color when `color` is set.
///
/// Colors follow the AirNow scale:
/// - Good: green
/// - Moderate: yellow
/// - Unhealthy for Sensitive Groups: orange
/// - Unhealthy: red
/// - Very Unhealthy: purple
/// - Hazardous: maroon
pub fn category_label(category: AqiCategory, color: bool) -> String {
    let label = category.as_str();
    if !color {
        return label.to_string();
    }
    match category {
        AqiCategory::Good => label.green(),
        AqiCategory::Moderate => label.yellow(),
        AqiCategory::UnhealthyForSensitiveGroups => label.truecolor(255, 126, 0),
        AqiCategory::Unhealthy => label.red(),
        AqiCategory::VeryUnhealthy => label.truecolor(143, 63, 151),
        AqiCategory::Hazardous => label.truecolor(126, 0, 35).bold(),
    }
    .to_string()
}

/// `"101 (Unhealthy for Sensitive Groups)"`
pub fn aqi_value(value: i32, category: AqiCategory, color: bool) -> String {
    format!("{} ({})", value, category_label(category, color))
}

/// `"PM2.5: 101 (Unhealthy for Sensitive Groups)"`
pub fn aqi_result(result: &AqiResult, color: bool) -> String {
    format!(
        "{}: {}",
        result.pollutant,
        aqi_value(result.value, result.category, color)
    )
}

/// One-line station summary for listings.
pub fn station_line(station: &Station) -> String {
    let mut line = format!(
        "{}  {}  ({:.4}, {:.4})",
        station.id, station.name, station.latitude, station.longitude
    );
    if let Some(provider) = &station.provider {
        line.push_str(&format!("  [{}]", provider));
    }
    if !station.active {
        line.push_str("  inactive");
    }
    line
}

/// Field lines for a single station.
pub fn station_details(station: &Station) -> Vec<String> {
    let mut lines = vec![
        format!("name: {}", station.name),
        format!("location: {:.4}, {:.4}", station.latitude, station.longitude),
    ];
    if let Some(provider) = &station.provider {
        lines.push(format!("provider: {}", provider));
    }
    if let Some(metadata) = &station.metadata {
        lines.push(format!("metadata: {}", metadata));
    }
    lines.push(format!("active: {}", station.active));
    lines.push(format!("created: {}", station.created_at.to_rfc3339()));
    lines
}

/// One-line reading summary for listings.
pub fn reading_line(reading: &Reading) -> String {
    format!(
        "{}  {}  {}  {}",
        reading.id,
        reading.station_id,
        concentrations(reading),
        reading.created_at.format("%Y-%m-%d %H:%M:%S")
    )
}

/// `"PM2.5 35.5 µg/m³, PM10 154 µg/m³"`, PM10 shown as `-` when absent.
pub fn concentrations(reading: &Reading) -> String {
    let pm10 = reading
        .pm10
        .map(|v| format!("{} µg/m³", v))
        .unwrap_or_else(|| "-".to_string());
    format!("PM2.5 {} µg/m³, PM10 {}", reading.pm25, pm10)
}

/// Field lines for an AQI record.
pub fn record_details(record: &AqiRecord, color: bool) -> Vec<String> {
    vec![
        format!(
            "AQI: {} from {}",
            aqi_value(record.aqi_value, record.category, color),
            record.dominant_pollutant()
        ),
        format!(
            "PM2.5: {}",
            aqi_value(record.pm25_aqi, record.pm25_category, color)
        ),
        format!(
            "PM10: {}",
            aqi_value(record.pm10_aqi, record.pm10_category, color)
        ),
        format!("computed: {}", record.computed_at.to_rfc3339()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use airaware::aqi;
    use airaware::domain::{NewReading, NewStation};

    #[test]
    fn test_plain_category_label() {
        assert_eq!(
            category_label(AqiCategory::UnhealthyForSensitiveGroups, false),
            "Unhealthy for Sensitive Groups"
        );
        assert_eq!(aqi_value(42, AqiCategory::Good, false), "42 (Good)");
    }

    #[test]
    fn test_aqi_result_line() {
        let r = aqi::calculate_for_pm10(600.0);
        assert_eq!(aqi_result(&r, false), "PM10: 500 (Hazardous)");
    }

    #[test]
    fn test_station_line_marks_inactive() {
        let mut station = Station::new(NewStation {
            name: "Pier".to_string(),
            latitude: 1.5,
            longitude: 2.25,
            provider: Some("acme".to_string()),
            metadata: None,
        });
        station.active = false;
        let line = station_line(&station);
        assert!(line.contains("Pier  (1.5000, 2.2500)  [acme]  inactive"));
    }

    #[test]
    fn test_concentrations_without_pm10() {
        let reading = Reading::new(
            NewReading {
                station_id: "stn-20261019-abc123".to_string(),
                pm25: 8.5,
                ..Default::default()
            },
            None,
        );
        assert_eq!(concentrations(&reading), "PM2.5 8.5 µg/m³, PM10 -");
    }
}
