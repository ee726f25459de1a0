use chrono::{NaiveTime, TimeDelta, Timelike};

/// Military time: two-digit hour followed by two-digit minute, no separator.
pub const MILITARY_TIME_FORMAT: &str = "%H%M";

/// Parses a `"HHMM"` token into its offset from civil midnight.
///
/// Exactly four ASCII digits are required, `"0000"` through `"2359"`.
pub fn parse_start_of_day(token: &str) -> Option<TimeDelta> {
    if token.len() != 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let time = NaiveTime::parse_from_str(token, MILITARY_TIME_FORMAT).ok()?;
    Some(TimeDelta::seconds(i64::from(time.num_seconds_from_midnight())))
}
