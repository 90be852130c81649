use chrono::{SecondsFormat, Utc};

/// Current UTC time as ISO-8601 with millisecond precision, e.g. `2026-10-16T09:30:00.123Z`.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
