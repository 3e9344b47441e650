//! Timestamp-based record ids.

use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch, 0 if the clock is before it
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Fresh id for a new record.
///
/// Uses the timestamp, bumped past the largest existing id so two records
/// created within the same millisecond still get distinct ids.
pub fn next_id<I>(existing_ids: I, now_millis: u64) -> u64
where
    I: IntoIterator<Item = u64>,
{
    match existing_ids.into_iter().max() {
        Some(max_id) if max_id >= now_millis => max_id + 1,
        _ => now_millis,
    }
}
