//! Datetime helpers for sidebar content.
//!
//! - Serde support for `published_at`: RFC3339 string or Unix timestamp in, RFC3339 out
//! - Relative age labels ("2 hours ago") for alerts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Serializes `DateTime<Utc>` as an RFC3339 string.
pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.to_rfc3339())
}

/// Deserializes `DateTime<Utc>` from RFC3339 or Unix timestamp.
///
/// Unix timestamps are auto-detected as seconds or milliseconds.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TimestampOrString {
        String(String),
        I64(i64),
    }

    match TimestampOrString::deserialize(deserializer)? {
        TimestampOrString::String(s) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| Error::custom(format!("Invalid RFC3339 timestamp: {e}"))),
        TimestampOrString::I64(ts) => {
            parse_unix_timestamp(ts).ok_or_else(|| Error::custom("Invalid Unix timestamp"))
        }
    }
}

/// Parses a Unix timestamp with second/millisecond auto-detection.
fn parse_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    // Values larger than 10^11 are interpreted as milliseconds.
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}

/// Human readable age of `then` relative to `now`.
///
/// Timestamps in the future are reported as "just now".
pub fn relative_age(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);

    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }

    plural(elapsed.num_days(), "day")
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}
