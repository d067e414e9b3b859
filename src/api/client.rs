//! Blocking HTTP client for the HR backend.
//!
//! Every authenticated call carries `Authorization: Bearer <token>` and
//! `Accept: application/json`. HTTP 401 maps to [`AppError::SessionExpired`];
//! the command layer decides what to clear (the client itself never touches
//! the local store). Mutations are form-encoded, responses are JSON; a body
//! that is not JSON maps to [`AppError::MalformedResponse`] with the raw
//! HTTP status.

use crate::api::payloads::{
    HistoryResponse, LoginResponse, MeResponse, PunchActionResponse, StatusResponse,
};
use crate::errors::{AppError, AppResult};
use crate::models::EventKind;
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authed(&self, req: RequestBuilder) -> AppResult<RequestBuilder> {
        let token = self.token.as_deref().ok_or(AppError::NotLoggedIn)?;
        Ok(req
            .header("Authorization", format!("Bearer {token}"))
            .header("Accept", "application/json"))
    }

    /// Map the response status, then decode the JSON body.
    fn decode<T: DeserializeOwned>(resp: Response) -> AppResult<T> {
        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(AppError::SessionExpired);
        }

        let body = resp.text()?;
        if !status.is_success() {
            // Prefer the server's own message when the error body is JSON
            if let Ok(err) = serde_json::from_str::<serde_json::Value>(&body)
                && let Some(msg) = err.get("message").and_then(|m| m.as_str())
            {
                return Err(AppError::Api(msg.to_string()));
            }
            return Err(AppError::MalformedResponse(status.as_u16()));
        }

        serde_json::from_str(&body).map_err(|_| AppError::MalformedResponse(status.as_u16()))
    }

    /// POST /login with form-encoded credentials. Unauthenticated; a 401
    /// here means bad credentials, not an expired session.
    pub fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse> {
        let resp = self
            .http
            .post(self.url("/login"))
            .header("Accept", "application/json")
            .form(&[("email", email), ("password", password)])
            .send()?;

        let status = resp.status();
        let body = resp.text()?;
        let parsed: Result<LoginResponse, _> = serde_json::from_str(&body);

        if !status.is_success() {
            let msg = parsed
                .ok()
                .and_then(|r| r.message)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            return Err(AppError::Auth(msg));
        }

        parsed.map_err(|_| AppError::MalformedResponse(status.as_u16()))
    }

    /// POST /logout. Best-effort by contract: callers ignore the error.
    pub fn logout(&self) -> AppResult<()> {
        let resp = self.authed(self.http.post(self.url("/logout")))?.send()?;
        if resp.status() == StatusCode::UNAUTHORIZED {
            return Err(AppError::SessionExpired);
        }
        Ok(())
    }

    pub fn get_me(&self) -> AppResult<MeResponse> {
        let resp = self.authed(self.http.get(self.url("/me")))?.send()?;
        Self::decode(resp)
    }

    pub fn get_status(&self) -> AppResult<StatusResponse> {
        let resp = self.authed(self.http.get(self.url("/user/status")))?.send()?;
        Self::decode(resp)
    }

    pub fn get_history(&self) -> AppResult<HistoryResponse> {
        let resp = self
            .authed(self.http.get(self.url("/punch/history")))?
            .send()?;
        Self::decode(resp)
    }

    /// POST /punch/action with `type` and epoch-seconds `timestamp`.
    pub fn punch_action(&self, kind: EventKind, timestamp: i64) -> AppResult<PunchActionResponse> {
        let resp = self
            .authed(self.http.post(self.url("/punch/action")))?
            .form(&[("type", kind.as_str()), ("timestamp", &timestamp.to_string())])
            .send()?;
        Self::decode(resp)
    }
}
