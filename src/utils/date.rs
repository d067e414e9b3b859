use chrono::{Local, NaiveDate, TimeZone};

/// Calendar date (local time) of an epoch-seconds timestamp.
pub fn date_of_epoch(ts: i64) -> Option<NaiveDate> {
    Local.timestamp_opt(ts, 0).single().map(|dt| dt.date_naive())
}

/// True when the timestamp falls on the given calendar date.
/// The single-shift-per-day rule works on calendar dates, not 24h windows.
pub fn is_on_date(ts: i64, date: NaiveDate) -> bool {
    date_of_epoch(ts) == Some(date)
}
