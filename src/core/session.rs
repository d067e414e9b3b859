//! Session lifecycle: login, manual logout, forced expiry.
//!
//! The two paths that end a session are deliberately different:
//! - manual logout clears token, user, punch state and cached history
//!   (theme and remembered credentials stay);
//! - a 401 expiry clears token and user only, so an in-progress punch
//!   session survives re-login intact.

use crate::api::ApiClient;
use crate::errors::{AppError, AppResult};
use crate::models::{SavedCreds, Session, StoredUser};
use crate::store::{StateStore, keys};

pub struct SessionLogic;

impl SessionLogic {
    /// Current session from the local store, if any.
    pub fn current<S: StateStore>(store: &S) -> AppResult<Option<Session>> {
        let token: Option<String> = store.get_json(keys::TOKEN)?;
        match token {
            None => Ok(None),
            Some(token) => {
                let user: Option<StoredUser> = store.get_json(keys::USER)?;
                Ok(Some(Session { token, user }))
            }
        }
    }

    pub fn saved_credentials<S: StateStore>(store: &S) -> AppResult<Option<SavedCreds>> {
        store.get_json(keys::SAVED_CREDS)
    }

    /// Authenticate and persist the session. Empty credentials are refused
    /// before any network call.
    pub fn login<S: StateStore>(
        store: &mut S,
        client: &ApiClient,
        email: &str,
        password: &str,
        remember: bool,
    ) -> AppResult<Session> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::EmptyCredentials);
        }

        let resp = client.login(email, password)?;
        let token = resp
            .token()
            .ok_or_else(|| AppError::Auth("no token in server response".to_string()))?
            .to_string();

        let user = resp.user.as_ref().and_then(|u| u.to_stored());

        store.set_json(keys::TOKEN, &token)?;
        match &user {
            Some(u) => store.set_json(keys::USER, u)?,
            None => store.remove(keys::USER)?,
        }

        if remember {
            store.set_json(
                keys::SAVED_CREDS,
                &SavedCreds {
                    email: email.to_string(),
                    password: password.to_string(),
                },
            )?;
        }

        store.audit("login", email, "login succeeded")?;

        Ok(Session { token, user })
    }

    /// Manual logout. The server call is best-effort; local cleanup happens
    /// regardless.
    pub fn logout<S: StateStore>(store: &mut S, client: &ApiClient) -> AppResult<()> {
        if let Err(e) = client.logout() {
            store.audit("logout", "server", &format!("logout call failed: {e}"))?;
        }

        store.remove(keys::TOKEN)?;
        store.remove(keys::USER)?;
        store.remove(keys::PUNCH_IN_TIME)?;
        store.remove(keys::HISTORY)?;

        store.audit("logout", "", "session closed")?;
        Ok(())
    }

    /// Forced logout after an HTTP 401. Keeps punch state and history.
    pub fn expire<S: StateStore>(store: &mut S) -> AppResult<()> {
        store.remove(keys::TOKEN)?;
        store.remove(keys::USER)?;
        store.audit("expired", "", "session expired (HTTP 401), punch state kept")?;
        Ok(())
    }
}
