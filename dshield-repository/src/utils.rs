//! Utility functions for the D-Shield repository.

use uuid::Uuid;

/// Generate `len` random lowercase hex characters.
///
/// Characters are taken from a fresh v4 UUID, so `len` is capped at 32.
pub fn random_hex(len: usize) -> String {
    let mut hex = Uuid::new_v4().simple().to_string();
    hex.truncate(len);
    hex
}

/// Current time as fractional seconds since the Unix epoch.
pub fn unix_now() -> f64 {
    chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
