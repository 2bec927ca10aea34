use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Display format of access log timestamps, e.g. `01.03.2026, 15:04:05`.
const LOG_TIME_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

/// Builds the fixed offset used for log timestamps.
///
/// Offsets outside the valid range (beyond ±23 hours) fall back to UTC.
pub fn utc_offset(hours: i32) -> FixedOffset {
    hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix())
}

/// Renders an instant as local time in the given offset.
pub fn format_local_time(instant: DateTime<Utc>, offset: FixedOffset) -> String {
    instant.with_timezone(&offset).format(LOG_TIME_FORMAT).to_string()
}
