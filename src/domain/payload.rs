//! PM10 extraction from raw provider payloads.
//!
//! Some sensors only report PM10 inside their vendor JSON. The keys checked,
//! in order, are `pm10`, `pm_10` and `pm10_atm`.

use serde_json::Value;

const PM10_KEYS: [&str; 3] = ["pm10", "pm_10", "pm10_atm"];

/// Pull a numeric PM10 value out of a JSON object payload.
///
/// Returns `None` for blank or unparseable payloads, non-object roots, and
/// keys whose value is not a JSON number.
pub fn extract_pm10(payload: &str) -> Option<f64> {
    if payload.trim().is_empty() {
        return None;
    }

    let root: Value = match serde_json::from_str(payload) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(error = %e, "ignoring unparseable payload");
            return None;
        }
    };

    PM10_KEYS
        .iter()
        .find_map(|key| root.get(key).and_then(Value::as_f64))
}
