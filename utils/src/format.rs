//! Display formatting helpers for amounts and countdowns.

use instinct_types::Timestamp;

/// Format integer cents as a dollar string, e.g. `1250` → `"$12.50"`.
pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Format the time remaining until `end` as a compact countdown string.
///
/// Returns `"Ended"` once `end` has passed.
pub fn format_time_left(end: Timestamp, now: Timestamp) -> String {
    if end.has_passed(now) {
        return "Ended".to_string();
    }
    let secs = end.remaining_until(now);
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs < 86400 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
    }
}
