use super::event_kind::EventKind;
use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

/// One attendance event, as cached locally and as sent by the server.
/// `timestamp` is epoch seconds; the wire field for the kind is `type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub timestamp: i64,
}

impl HistoryEntry {
    pub fn new(kind: EventKind, timestamp: i64) -> Self {
        Self { kind, timestamp }
    }

    pub fn datetime(&self) -> Option<DateTime<Local>> {
        Local.timestamp_opt(self.timestamp, 0).single()
    }

    /// Localized time-of-day, e.g. "09:41:03".
    pub fn time_str(&self) -> String {
        self.datetime()
            .map(|dt| dt.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "--:--:--".to_string())
    }

    pub fn datetime_str(&self) -> String {
        self.datetime()
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| format!("epoch {}", self.timestamp))
    }
}
