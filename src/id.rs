//! Entity ID generation with date-based prefixes.

use chrono::Utc;
use rand::Rng;

const BASE36_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random suffix.
const SUFFIX_LEN: usize = 6;

/// Prefix for station IDs.
pub const STATION_PREFIX: &str = "stn";
/// Prefix for reading IDs.
pub const READING_PREFIX: &str = "rdg";
/// Prefix for AQI record IDs.
pub const RECORD_PREFIX: &str = "aqi";

/// Generate a new ID in the format: PREFIX-YYYYMMDD-XXXXXX
/// where XXXXXX is a random base36 suffix.
pub fn generate_id(prefix: &str) -> String {
    let date = Utc::now().format("%Y%m%d");
    format!("{}-{}-{}", prefix, date, random_base36(SUFFIX_LEN))
}

/// Check that `id` looks like something [`generate_id`] produced for `prefix`.
///
/// Used to reject path-like input before it reaches the file repository.
pub fn is_valid_id(prefix: &str, id: &str) -> bool {
    let mut parts = id.splitn(3, '-');
    let (Some(p), Some(date), Some(suffix)) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    p == prefix
        && date.len() == 8
        && date.bytes().all(|b| b.is_ascii_digit())
        && suffix.len() == SUFFIX_LEN
        && suffix.bytes().all(|b| BASE36_CHARS.contains(&b))
}

/// Generate a random base36 string of the given length.
fn random_base36(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| BASE36_CHARS[rng.gen_range(0..36)] as char)
        .collect()
}
