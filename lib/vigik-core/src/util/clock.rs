use time::OffsetDateTime;

/// Milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}
