//! Wire types for the HR backend.
//!
//! The backend is loose about shapes (token at the top level or under
//! `data`, history timestamps as numbers or strings), so most fields are
//! optional and normalization happens in accessor methods.

use crate::models::{EventKind, HistoryEntry, StoredUser};
use crate::utils::time::parse_server_timestamp;
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: Option<String>,
    pub data: Option<LoginData>,
    pub user: Option<ApiUser>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginData {
    pub token: Option<String>,
}

impl LoginResponse {
    /// The token lives either at the top level or under `data`.
    pub fn token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .or_else(|| self.data.as_ref().and_then(|d| d.token.as_deref()))
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub business_email: Option<String>,
}

impl ApiUser {
    pub fn to_stored(&self) -> Option<StoredUser> {
        let name = self.name.clone()?;
        let email = self
            .business_email
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_default();
        Some(StoredUser { name, email })
    }
}

#[derive(Debug, Deserialize)]
pub struct MeResponse {
    pub user: Option<ApiUser>,
}

#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    #[serde(rename = "isPunchedIn", default)]
    pub is_punched_in: bool,
    #[serde(rename = "punchInTime", default)]
    pub punch_in_time: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub history: Vec<WireHistoryEntry>,
}

#[derive(Debug, Deserialize)]
pub struct WireHistoryEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: Option<serde_json::Value>,
}

impl WireHistoryEntry {
    /// Normalize one server entry. Numbers are taken as epoch seconds,
    /// strings go through the loose timestamp parser. Entries that cannot
    /// be normalized are dropped by the caller.
    pub fn to_entry(&self, today: NaiveDate) -> Option<HistoryEntry> {
        let kind = EventKind::from_wire(&self.kind)?;
        let ts = match self.timestamp.as_ref()? {
            serde_json::Value::Number(n) => n.as_i64()?,
            serde_json::Value::String(s) => parse_server_timestamp(s, today)?.timestamp(),
            _ => return None,
        };
        Some(HistoryEntry::new(kind, ts))
    }
}

#[derive(Debug, Deserialize)]
pub struct PunchActionResponse {
    pub status: Option<String>,
    pub message: Option<String>,
}

impl PunchActionResponse {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }

    pub fn message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| "punch action rejected".to_string())
    }
}
