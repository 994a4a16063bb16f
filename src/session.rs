//! Per-session token storage.
//!
//! Tokens live server-side in an in-memory store keyed by a session id;
//! the client only ever holds the id, delivered as a signed cookie. One
//! record exists per session and mutations are only visible to requests
//! carrying the same session cookie.
//!
//! Known limitation: the expiry check in the handlers and the subsequent
//! token use are not atomic against parallel requests in the same session.
//! A client firing concurrent requests right at expiry may trigger two
//! refresh redirects. Acceptable for a single-user interactive session.

use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use rand::{Rng, distr::Alphanumeric};
use tokio::sync::Mutex;

use crate::types::TokenResponse;

/// Name of the signed cookie carrying the session id.
pub const SESSION_COOKIE: &str = "bendify_session";

const SESSION_ID_LEN: usize = 32;

/// The token material of one authenticated session.
///
/// `expires_at` is always derived as issuance time plus the provider
/// reported lifetime. A missing record means "unauthenticated".
#[derive(Debug, Clone)]
pub struct TokenRecord {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: i64,
}

impl TokenRecord {
    /// Builds a record from a successful authorization-code exchange.
    pub fn new(response: TokenResponse, now: i64) -> Self {
        TokenRecord {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            expires_at: now + response.expires_in as i64,
        }
    }

    /// Applies a refresh-token exchange to this record.
    ///
    /// The provider may omit a new refresh token, in which case the
    /// prior one is retained.
    pub fn apply_refresh(&mut self, response: TokenResponse, now: i64) {
        self.access_token = response.access_token;
        self.expires_at = now + response.expires_in as i64;
        if let Some(refresh_token) = response.refresh_token {
            self.refresh_token = Some(refresh_token);
        }
    }

    /// Whether the access token has expired at `now`.
    ///
    /// The boundary is exclusive: a token is still valid at the exact
    /// second of `expires_at`.
    pub fn is_expired(&self, now: i64) -> bool {
        now > self.expires_at
    }
}

/// Generates a fresh random session identifier.
pub fn new_session_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LEN)
        .map(char::from)
        .collect()
}

/// Current Unix timestamp in seconds.
pub fn now_timestamp() -> i64 {
    Utc::now().timestamp()
}

/// Server-side session store mapping session ids to token records.
///
/// Cheap to clone; all clones share the same underlying map.
#[derive(Clone, Default)]
pub struct SessionStore {
    records: Arc<Mutex<HashMap<String, TokenRecord>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, session_id: &str) -> Option<TokenRecord> {
        self.records.lock().await.get(session_id).cloned()
    }

    pub async fn put(&self, session_id: String, record: TokenRecord) {
        self.records.lock().await.insert(session_id, record);
    }

    pub async fn clear(&self, session_id: &str) {
        self.records.lock().await.remove(session_id);
    }
}
