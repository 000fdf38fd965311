//! End-to-end tests driving the airaware binary.

mod common;

use common::{stderr, stdout, Project};
use std::fs;

// ============================================================================
// INIT
// ============================================================================

#[test]
fn test_init_creates_layout() {
    let project = Project::initialized();

    assert!(project.path().join(".airaware/config.yaml").is_file());
    for dir in ["stations", "readings", "records"] {
        assert!(project.path().join(".airaware/data").join(dir).is_dir(), "{}", dir);
    }
}

#[test]
fn test_init_twice_requires_force() {
    let project = Project::initialized();

    let out = project.run(&["init"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("--force"));

    let out = project.run(&["init", "--force"]);
    assert!(out.status.success());
}

#[test]
fn test_commands_require_init() {
    let project = Project::empty();

    let out = project.run(&["station", "list"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("airaware init"));
}

// ============================================================================
// STATELESS AQI
// ============================================================================

#[test]
fn test_aqi_command_json() {
    let project = Project::empty();

    let calc = project.run_json(&["aqi", "--pm25", "35.5", "--pm10", "154"]);
    assert_eq!(calc["final"]["value"], 101);
    assert_eq!(calc["final"]["category"], "Unhealthy for Sensitive Groups");
    assert_eq!(calc["final"]["pollutant"], "PM2.5");
    assert_eq!(calc["pm10"]["value"], 100);
    assert_eq!(calc["pm10"]["category"], "Moderate");
}

#[test]
fn test_aqi_command_pm10_dominates() {
    let project = Project::empty();

    let calc = project.run_json(&["aqi", "--pm25", "12", "--pm10", "354"]);
    assert_eq!(calc["final"]["value"], 200);
    assert_eq!(calc["final"]["pollutant"], "PM10");
}

#[test]
fn test_aqi_command_saturates() {
    let project = Project::empty();

    let calc = project.run_json(&["aqi", "--pm25", "900"]);
    assert_eq!(calc["final"]["value"], 500);
    assert_eq!(calc["final"]["category"], "Hazardous");
    assert_eq!(calc["pm10"]["value"], 0);
}

#[test]
fn test_aqi_command_human_output() {
    let project = Project::empty();

    let out = project.run(&["aqi", "--pm25", "24"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Moderate"), "{}", text);
    assert!(text.contains("PM2.5"), "{}", text);
}

// ============================================================================
// STATIONS
// ============================================================================

#[test]
fn test_station_add_show_list() {
    let project = Project::initialized();
    let id = project.add_station("Harbor");

    let shown = project.run_json(&["station", "show", &id]);
    assert_eq!(shown["name"], "Harbor");
    assert_eq!(shown["latitude"], 37.8);
    assert_eq!(shown["longitude"], -122.4);
    assert_eq!(shown["active"], true);

    let listed = project.run_json(&["station", "list"]);
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], id.as_str());
}

#[test]
fn test_station_add_rejects_bad_latitude() {
    let project = Project::initialized();

    let out = project.run(&["station", "add", "--name", "Pole", "--lat", "91", "--lon", "0"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("Invalid input"));
}

#[test]
fn test_station_update_keeps_omitted_fields() {
    let project = Project::initialized();
    let id = project.add_station("Harbor");

    let updated = project.run_json(&["station", "update", &id, "--name", "Pier 39", "--active", "false"]);
    assert_eq!(updated["name"], "Pier 39");
    assert_eq!(updated["active"], false);
    assert_eq!(updated["latitude"], 37.8);

    let shown = project.run_json(&["station", "show", &id]);
    assert_eq!(shown["name"], "Pier 39");
}

#[test]
fn test_station_show_unknown_exits_2() {
    let project = Project::initialized();

    let out = project.run(&["station", "show", "stn-20260101-zzzzzz"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stdout(&out).contains("Station not found"));
}

// ============================================================================
// READINGS
// ============================================================================

#[test]
fn test_reading_add_stores_reading_and_record() {
    let project = Project::initialized();
    let station = project.add_station("Harbor");

    let ingested = project.run_json(&["reading", "add", "--station", &station, "--pm25", "35.5", "--pm10", "154"]);
    assert_eq!(ingested["reading"]["station_id"], station.as_str());
    assert_eq!(ingested["aqi"]["aqi_value"], 101);
    assert_eq!(ingested["aqi"]["category"], "Unhealthy for Sensitive Groups");
    assert_eq!(ingested["aqi"]["pm10_aqi"], 100);

    let reading_id = ingested["reading"]["id"].as_str().unwrap();
    let shown = project.run_json(&["reading", "show", reading_id]);
    assert_eq!(shown["reading"]["pm25"], 35.5);
    assert_eq!(shown["aqi"]["id"], ingested["aqi"]["id"]);

    let records = fs::read_dir(project.path().join(".airaware/data/records")).unwrap().count();
    assert_eq!(records, 1);
}

#[test]
fn test_reading_add_takes_pm10_from_payload() {
    let project = Project::initialized();
    let station = project.add_station("Harbor");

    let ingested = project.run_json(&[
        "reading",
        "add",
        "--station",
        &station,
        "--pm25",
        "5",
        "--payload",
        r#"{"pm_10": 354}"#,
    ]);
    assert_eq!(ingested["reading"]["pm10"], 354.0);
    assert_eq!(ingested["aqi"]["aqi_value"], 200);
}

#[test]
fn test_reading_add_unknown_station_exits_2() {
    let project = Project::initialized();

    let out = project.run(&["reading", "add", "--station", "stn-20260101-zzzzzz", "--pm25", "10"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stdout(&out).contains("Station not found"));
}

#[test]
fn test_reading_add_rejects_negative_concentration() {
    let project = Project::initialized();
    let station = project.add_station("Harbor");

    let out = project.run(&["reading", "add", "--station", &station, "--pm25", "-1"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("Invalid input"));
}

#[test]
fn test_reading_list_filters_by_station() {
    let project = Project::initialized();
    let a = project.add_station("A");
    let b = project.add_station("B");

    project.run_json(&["reading", "add", "--station", &a, "--pm25", "5"]);
    project.run_json(&["reading", "add", "--station", &b, "--pm25", "6"]);
    project.run_json(&["reading", "add", "--station", &b, "--pm25", "7"]);

    let all = project.run_json(&["reading", "list"]);
    assert_eq!(all.as_array().unwrap().len(), 3);

    let only_b = project.run_json(&["reading", "list", "--station", &b]);
    let only_b = only_b.as_array().unwrap();
    assert_eq!(only_b.len(), 2);
    assert!(only_b.iter().all(|r| r["station_id"] == b.as_str()));
}

// ============================================================================
// LATEST AQI
// ============================================================================

#[test]
fn test_station_aqi_without_records_exits_2() {
    let project = Project::initialized();
    let station = project.add_station("Harbor");

    let out = project.run(&["station", "aqi", &station]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stdout(&out).contains("No AQI records"));
}

#[test]
fn test_station_aqi_returns_latest() {
    let project = Project::initialized();
    let station = project.add_station("Harbor");

    project.run_json(&["reading", "add", "--station", &station, "--pm25", "5"]);
    std::thread::sleep(std::time::Duration::from_millis(20));
    project.run_json(&["reading", "add", "--station", &station, "--pm25", "40"]);

    let latest = project.run_json(&["station", "aqi", &station]);
    assert_eq!(latest["aqi_value"], 112);
    assert_eq!(latest["reading"]["pm25"], 40.0);
}

// ============================================================================
// AUTH
// ============================================================================

fn require_key(project: &Project, key: &str) {
    let config = format!(
        "storage:\n  data_dir: .airaware/data\nauth:\n  required: true\n  api_key: {}\n",
        key
    );
    fs::write(project.path().join(".airaware/config.yaml"), config).unwrap();
}

#[test]
fn test_auth_missing_key_exits_3() {
    let project = Project::initialized();
    require_key(&project, "s3cret");

    let out = project.run(&["station", "list"]);
    assert_eq!(out.status.code(), Some(3));
    assert!(stdout(&out).contains("API key is missing"));
}

#[test]
fn test_auth_wrong_key_exits_3() {
    let project = Project::initialized();
    require_key(&project, "s3cret");

    let out = project.run(&["--api-key", "guess", "station", "list"]);
    assert_eq!(out.status.code(), Some(3));
    assert!(stdout(&out).contains("Invalid API key"));
}

#[test]
fn test_auth_matching_key_passes() {
    let project = Project::initialized();
    require_key(&project, "s3cret");

    let out = project.run(&["--api-key", "s3cret", "station", "list"]);
    assert!(out.status.success(), "{}", stderr(&out));
}

#[test]
fn test_auth_not_needed_for_stateless_aqi() {
    let project = Project::initialized();
    require_key(&project, "s3cret");

    let out = project.run(&["aqi", "--pm25", "10"]);
    assert!(out.status.success());
}

#[test]
fn test_auth_required_without_key_only_blocks_stored_data() {
    let project = Project::initialized();
    fs::write(
        project.path().join(".airaware/config.yaml"),
        "storage:\n  data_dir: .airaware/data\nauth:\n  required: true\n",
    )
    .unwrap();

    let out = project.run(&["aqi", "--pm25", "10"]);
    assert!(out.status.success(), "{}", stdout(&out));

    let out = project.run(&["--api-key", "anything", "station", "list"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("auth.api_key is empty"));
}

// ============================================================================
// COMPLETION
// ============================================================================

#[test]
fn test_completion_bash() {
    let project = Project::empty();

    let out = project.run(&["completion", "bash"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("airaware"));
}
