//! Local/remote state reconciliation.
//!
//! Policy: local wins, never auto-clear. The server's punch status is a
//! hint; the locally stored punch-in timestamp is the source of truth while
//! present, because the server reports a coarse time-of-day string with
//! AM/PM and day-boundary ambiguity and may lag behind a punch that just
//! happened here.

use crate::api::ApiClient;
use crate::api::payloads::StatusResponse;
use crate::errors::{AppError, AppResult};
use crate::models::{HistoryEntry, StoredUser};
use crate::store::{StateStore, keys};
use crate::utils::time::parse_server_timestamp;
use chrono::{DateTime, Local};

/// What a sync pass ended up applying. Steps that failed are listed in
/// `errors`; their failure never rolls back what another step applied.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub profile: Option<StoredUser>,
    pub punched_in: bool,
    pub punch_in_time: Option<i64>,
    pub history: Vec<HistoryEntry>,
    pub errors: Vec<String>,
}

pub struct Reconciler;

impl Reconciler {
    /// Refresh profile, punch status and history from the server, each step
    /// isolated from the others. A 401 on any step propagates immediately so
    /// the caller can run the expiry path; every other failure is recorded
    /// and the sync continues.
    pub fn sync<S: StateStore>(
        store: &mut S,
        client: &ApiClient,
        now: DateTime<Local>,
        keep: usize,
    ) -> AppResult<SyncReport> {
        let mut report = SyncReport::default();

        match client.get_me() {
            Ok(me) => {
                if let Some(user) = me.user.as_ref().and_then(|u| u.to_stored()) {
                    store.set_json(keys::USER, &user)?;
                    report.profile = Some(user);
                }
            }
            Err(AppError::SessionExpired) => return Err(AppError::SessionExpired),
            Err(e) => {
                store.audit("sync", "me", &format!("profile fetch failed: {e}"))?;
                report.errors.push(format!("profile: {e}"));
            }
        }

        match client.get_status() {
            Ok(status) => {
                let (punched_in, ts) = Self::apply_status(store, &status, now)?;
                report.punched_in = punched_in;
                report.punch_in_time = ts;
            }
            Err(AppError::SessionExpired) => return Err(AppError::SessionExpired),
            Err(e) => {
                store.audit("sync", "status", &format!("status fetch failed: {e}"))?;
                report.errors.push(format!("status: {e}"));
                // Local state stands untouched
                report.punch_in_time = store.get_json(keys::PUNCH_IN_TIME)?;
                report.punched_in = report.punch_in_time.is_some();
            }
        }

        match client.get_history() {
            Ok(resp) => {
                let today = now.date_naive();
                let mut entries: Vec<HistoryEntry> = resp
                    .history
                    .iter()
                    .filter_map(|w| w.to_entry(today))
                    .collect();
                if entries.len() > keep {
                    let excess = entries.len() - keep;
                    entries.drain(..excess);
                }
                store.set_json(keys::HISTORY, &entries)?;
                report.history = entries;
            }
            Err(AppError::SessionExpired) => return Err(AppError::SessionExpired),
            Err(e) => {
                store.audit("sync", "history", &format!("history fetch failed: {e}"))?;
                report.errors.push(format!("history: {e}"));
                report.history = store.get_json(keys::HISTORY)?.unwrap_or_default();
            }
        }

        Ok(report)
    }

    /// Merge the server punch status with local punch state.
    ///
    /// Server punched-in: the local timestamp wins when present; otherwise
    /// the server string is parsed and adopted, falling back to the current
    /// time when unparseable (the anomaly is audit-logged). Server
    /// punched-out: a present local timestamp is kept as-is; only an
    /// explicit punch-out success clears it.
    fn apply_status<S: StateStore>(
        store: &mut S,
        status: &StatusResponse,
        now: DateTime<Local>,
    ) -> AppResult<(bool, Option<i64>)> {
        let local: Option<i64> = store.get_json(keys::PUNCH_IN_TIME)?;

        if status.is_punched_in {
            if let Some(ts) = local {
                return Ok((true, Some(ts)));
            }

            let parsed = status
                .punch_in_time
                .as_deref()
                .and_then(|raw| parse_server_timestamp(raw, now.date_naive()));

            let adopted = match parsed {
                Some(dt) => dt.timestamp(),
                None => {
                    store.audit(
                        "anomaly",
                        "status",
                        &format!(
                            "unusable server punch-in time {:?}, falling back to current time",
                            status.punch_in_time
                        ),
                    )?;
                    now.timestamp()
                }
            };

            store.set_json(keys::PUNCH_IN_TIME, &adopted)?;
            Ok((true, Some(adopted)))
        } else if let Some(ts) = local {
            store.audit(
                "sync",
                "status",
                "server reports punched out, keeping local punch-in",
            )?;
            Ok((true, Some(ts)))
        } else {
            Ok((false, None))
        }
    }
}
