pub mod config;
pub mod export;
pub mod history;
pub mod init;
pub mod log;
pub mod login;
pub mod logout;
pub mod punch;
pub mod status;
pub mod theme;
pub mod watch;

use crate::api::ApiClient;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::errors::{AppError, AppResult};
use crate::models::Theme;
use crate::store::{StateStore, keys, sqlite::SqliteStore};

/// Open the state store configured (or overridden) for this run.
pub fn open_store(cfg: &Config) -> AppResult<SqliteStore> {
    SqliteStore::new(&cfg.database)
}

/// Build an API client carrying the stored token, when present.
pub fn build_client(cfg: &Config, store: &SqliteStore) -> AppResult<ApiClient> {
    let token: Option<String> = store.get_json(keys::TOKEN)?;
    Ok(ApiClient::new(&cfg.server_url, cfg.request_timeout_secs)?.with_token(token))
}

/// Current theme from the store, defaulting to dark.
pub fn current_theme(store: &SqliteStore) -> Theme {
    store
        .get_json::<Theme>(keys::THEME)
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Run the forced-logout policy when a call came back with HTTP 401, then
/// hand the error back for reporting.
pub fn handle_expiry(store: &mut SqliteStore, err: AppError) -> AppError {
    if matches!(err, AppError::SessionExpired) {
        if let Err(e) = SessionLogic::expire(store) {
            return e;
        }
    }
    err
}
