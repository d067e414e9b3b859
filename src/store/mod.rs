//! Local state persistence.
//!
//! The reconciliation logic only ever talks to the [`StateStore`] trait, so
//! it can be exercised against the in-memory backend without touching disk.
//! The production backend is a SQLite key-value table.

pub mod log;
pub mod memory;
pub mod sqlite;

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Keys used in the state table. The names match the original host-storage
/// schema so a value written by one release remains readable by the next.
pub mod keys {
    pub const TOKEN: &str = "token";
    pub const USER: &str = "user";
    pub const THEME: &str = "theme";
    pub const SAVED_CREDS: &str = "savedCreds";
    pub const PUNCH_IN_TIME: &str = "punchInTime";
    pub const HISTORY: &str = "history";
}

/// Asynchronous-equivalent key-value storage: each call is independent and
/// atomic, writes are last-write-wins, and there is no cross-call
/// transaction. Callers must not rely on two calls being ordered together.
pub trait StateStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;

    /// Append a line to the audit log (operation, target, message).
    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()>;

    fn get_json<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>>
    where
        Self: Sized,
    {
        match self.get(key)? {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| AppError::BadStoredValue(key.to_string(), e.to_string())),
        }
    }

    fn set_json<T: Serialize>(&mut self, key: &str, value: &T) -> AppResult<()>
    where
        Self: Sized,
    {
        let raw = serde_json::to_string(value)
            .map_err(|e| AppError::BadStoredValue(key.to_string(), e.to_string()))?;
        self.set(key, &raw)
    }
}
