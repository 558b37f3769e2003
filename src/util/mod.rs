use chrono::{DateTime, SecondsFormat, Utc};

pub mod logging;
pub mod settings;

pub struct DateTimeUtils {}

impl DateTimeUtils {
    pub fn now() -> DateTime<Utc> {
        Utc::now()
    }

    pub fn to_millis(datetime: &DateTime<Utc>) -> i64 {
        datetime.timestamp_millis()
    }

    // RFC 3339 with milliseconds and a trailing Z, e.g. 2024-05-01T09:30:00.000Z
    pub fn to_iso(datetime: &DateTime<Utc>) -> String {
        datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
