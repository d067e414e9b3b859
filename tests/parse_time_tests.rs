use chrono::{Datelike, NaiveDate, Timelike};

use punchclock::utils::time::parse_server_timestamp;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date")
}

#[test]
fn test_parses_rfc3339_datetime() {
    let dt = parse_server_timestamp("2025-03-01T09:15:00+00:00", day()).expect("parsed");
    // Instant is preserved across the local-timezone conversion
    assert_eq!(dt.timestamp(), 1740820500);
}

#[test]
fn test_parses_naive_iso_datetime() {
    let dt = parse_server_timestamp("2025-03-01 09:15:00", day()).expect("parsed");
    assert_eq!((dt.year(), dt.month(), dt.day()), (2025, 3, 1));
    assert_eq!((dt.hour(), dt.minute(), dt.second()), (9, 15, 0));

    let dt = parse_server_timestamp("2025-03-01T09:15:00", day()).expect("parsed");
    assert_eq!((dt.hour(), dt.minute()), (9, 15));
}

#[test]
fn test_parses_am_pm_clock_against_given_date() {
    let dt = parse_server_timestamp("09:05:00 AM", day()).expect("parsed");
    assert_eq!(dt.date_naive(), day());
    assert_eq!((dt.hour(), dt.minute(), dt.second()), (9, 5, 0));

    let dt = parse_server_timestamp("03:30:00 PM", day()).expect("parsed");
    assert_eq!((dt.hour(), dt.minute()), (15, 30));
}

#[test]
fn test_twelve_oclock_edge_cases() {
    // Midnight
    let dt = parse_server_timestamp("12:00:00 AM", day()).expect("parsed");
    assert_eq!((dt.hour(), dt.minute()), (0, 0));

    // Noon
    let dt = parse_server_timestamp("12:30:00 PM", day()).expect("parsed");
    assert_eq!((dt.hour(), dt.minute()), (12, 30));
}

#[test]
fn test_parses_24h_clock_without_meridiem() {
    let dt = parse_server_timestamp("13:05:22", day()).expect("parsed");
    assert_eq!((dt.hour(), dt.minute(), dt.second()), (13, 5, 22));

    // Seconds are optional
    let dt = parse_server_timestamp("08:45", day()).expect("parsed");
    assert_eq!((dt.hour(), dt.minute(), dt.second()), (8, 45, 0));
}

#[test]
fn test_rejects_unusable_inputs() {
    assert!(parse_server_timestamp("", day()).is_none());
    assert!(parse_server_timestamp("   ", day()).is_none());
    assert!(parse_server_timestamp("not a time", day()).is_none());
    assert!(parse_server_timestamp("25:00:00", day()).is_none());
    // Hour out of range for a 12-hour clock
    assert!(parse_server_timestamp("13:05:22 PM", day()).is_none());
    assert!(parse_server_timestamp("00:10:00 AM", day()).is_none());
}
