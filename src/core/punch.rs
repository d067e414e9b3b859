//! Punch in/out logic and the local history ring.
//!
//! `punchInTime` is removed in exactly one place: the punch-out success path
//! below. Status syncs, parse failures and network errors never clear it.

use crate::api::ApiClient;
use crate::errors::{AppError, AppResult};
use crate::models::{EventKind, HistoryEntry};
use crate::store::{StateStore, keys};
use crate::utils::date;
use chrono::{DateTime, Local};

pub struct PunchLogic;

impl PunchLogic {
    pub fn punch_in_time<S: StateStore>(store: &S) -> AppResult<Option<i64>> {
        store.get_json(keys::PUNCH_IN_TIME)
    }

    pub fn load_history<S: StateStore>(store: &S) -> AppResult<Vec<HistoryEntry>> {
        Ok(store.get_json(keys::HISTORY)?.unwrap_or_default())
    }

    /// Append an entry and trim the ring to the most recent `keep` entries.
    pub fn push_history<S: StateStore>(
        store: &mut S,
        entry: HistoryEntry,
        keep: usize,
    ) -> AppResult<()> {
        let mut history = Self::load_history(store)?;
        history.push(entry);
        if history.len() > keep {
            let excess = history.len() - keep;
            history.drain(..excess);
        }
        store.set_json(keys::HISTORY, &history)
    }

    /// Client-side guard: one shift per calendar day. A cached `out` entry
    /// dated today means the shift is complete and punch-in is refused
    /// without a network call.
    pub fn shift_completed_today<S: StateStore>(
        store: &S,
        now: DateTime<Local>,
    ) -> AppResult<bool> {
        let today = now.date_naive();
        let history = Self::load_history(store)?;
        Ok(history
            .iter()
            .any(|e| e.kind.is_out() && date::is_on_date(e.timestamp, today)))
    }

    /// Minutes left before punch-out is allowed, rounded up. Zero when the
    /// minimum stay has elapsed.
    pub fn minutes_remaining(
        punch_in_ts: i64,
        now: DateTime<Local>,
        min_stay_minutes: i64,
    ) -> i64 {
        let elapsed_ms = now.timestamp_millis() - punch_in_ts * 1000;
        let required_ms = min_stay_minutes * 60_000;
        let remaining_ms = required_ms - elapsed_ms;
        if remaining_ms <= 0 {
            0
        } else {
            (remaining_ms + 59_999) / 60_000
        }
    }

    pub fn punch_in<S: StateStore>(
        store: &mut S,
        client: &ApiClient,
        now: DateTime<Local>,
        keep: usize,
    ) -> AppResult<HistoryEntry> {
        if Self::punch_in_time(store)?.is_some() {
            return Err(AppError::AlreadyPunchedIn);
        }
        if Self::shift_completed_today(store, now)? {
            return Err(AppError::ShiftComplete);
        }

        let ts = now.timestamp();
        let resp = client.punch_action(EventKind::In, ts)?;
        if !resp.is_success() {
            return Err(AppError::Api(resp.message()));
        }

        store.set_json(keys::PUNCH_IN_TIME, &ts)?;
        let entry = HistoryEntry::new(EventKind::In, ts);
        Self::push_history(store, entry.clone(), keep)?;
        store.audit("punch_in", "", &format!("punched in at {}", entry.datetime_str()))?;

        Ok(entry)
    }

    pub fn punch_out<S: StateStore>(
        store: &mut S,
        client: &ApiClient,
        now: DateTime<Local>,
        min_stay_minutes: i64,
        keep: usize,
    ) -> AppResult<HistoryEntry> {
        let punch_in_ts = Self::punch_in_time(store)?.ok_or(AppError::NotPunchedIn)?;

        let remaining = Self::minutes_remaining(punch_in_ts, now, min_stay_minutes);
        if remaining > 0 {
            return Err(AppError::MinimumStay(remaining));
        }

        let ts = now.timestamp();
        let resp = client.punch_action(EventKind::Out, ts)?;
        if !resp.is_success() {
            return Err(AppError::Api(resp.message()));
        }

        // The only place punch state is cleared.
        store.remove(keys::PUNCH_IN_TIME)?;
        let entry = HistoryEntry::new(EventKind::Out, ts);
        Self::push_history(store, entry.clone(), keep)?;
        store.audit("punch_out", "", &format!("punched out at {}", entry.datetime_str()))?;

        Ok(entry)
    }
}
