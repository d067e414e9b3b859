//! Unified application error type.
//! All modules (store, api, core, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Local store
    // ---------------------------
    #[error("Store error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Stored value for '{0}' is not valid JSON: {1}")]
    BadStoredValue(String, String),

    // ---------------------------
    // Network / server
    // ---------------------------
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Session expired, please log in again")]
    SessionExpired,

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Server error: {0}")]
    Api(String),

    #[error("Unexpected response from server (HTTP {0})")]
    MalformedResponse(u16),

    // ---------------------------
    // Client-side validation
    // ---------------------------
    #[error("Email and password are required")]
    EmptyCredentials,

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Already punched in")]
    AlreadyPunchedIn,

    #[error("Not punched in")]
    NotPunchedIn,

    #[error("Shift already completed today")]
    ShiftComplete,

    #[error("Cannot punch out yet: {0} minute(s) remaining")]
    MinimumStay(i64),

    #[error("Invalid theme '{0}' (expected 'light' or 'dark')")]
    InvalidTheme(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
