//! Time utilities: loose server-timestamp parsing and elapsed-time formatting.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use regex::Regex;

/// Parse the punch-in timestamp string reported by the server.
///
/// The backend is not consistent: depending on the deployment it returns a
/// full ISO datetime or a bare time-of-day such as "09:05:00 AM", which is
/// interpreted against `today`. Returns `None` when nothing usable can be
/// extracted; the caller decides the fallback (current time) and logs the
/// anomaly.
pub fn parse_server_timestamp(raw: &str, today: NaiveDate) -> Option<DateTime<Local>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    // Full ISO datetime with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    // Naive ISO datetime, with either 'T' or space separator
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Local.from_local_datetime(&naive).single();
        }
    }

    // Time-of-day, optionally with AM/PM, against today's date
    let time = parse_clock_time(s)?;
    Local.from_local_datetime(&today.and_time(time)).single()
}

/// Parse "HH:MM[:SS] [AM|PM]" into a NaiveTime.
fn parse_clock_time(s: &str) -> Option<NaiveTime> {
    let re = Regex::new(r"(?i)^(\d{1,2}):(\d{2})(?::(\d{2}))?\s*(AM|PM)?$").ok()?;
    let caps = re.captures(s)?;

    let mut hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minute: u32 = caps.get(2)?.as_str().parse().ok()?;
    let second: u32 = caps
        .get(3)
        .map(|m| m.as_str().parse().unwrap_or(0))
        .unwrap_or(0);

    if let Some(meridiem) = caps.get(4) {
        if hour == 0 || hour > 12 {
            return None;
        }
        match meridiem.as_str().to_uppercase().as_str() {
            "AM" => {
                // 12:xx AM is midnight
                if hour == 12 {
                    hour = 0;
                }
            }
            _ => {
                // 12:xx PM stays 12
                if hour != 12 {
                    hour += 12;
                }
            }
        }
    }

    NaiveTime::from_hms_opt(hour, minute, second)
}

/// Format elapsed seconds as zero-padded `HH:MM:SS`.
/// Hours are unbounded (a 27-hour shift shows "27:00:00", not "03:00:00");
/// negative inputs clamp to zero.
pub fn format_elapsed(seconds: i64) -> String {
    let s = seconds.max(0);
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

/// Render an epoch-seconds timestamp as local "HH:MM:SS".
pub fn epoch_to_clock(ts: i64) -> String {
    Local
        .timestamp_opt(ts, 0)
        .single()
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string())
}
