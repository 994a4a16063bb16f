use axum::{Router, extract::FromRef, routing::get};
use axum_extra::extract::cookie::Key;
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, config::Config, error, info, session::SessionStore};

/// Shared state injected into every handler.
///
/// Cloning is cheap; the configuration is behind an `Arc` and the session
/// store clones share one underlying map.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
    pub sessions: SessionStore,
    key: Key,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let key = Key::from(config.session_secret.as_bytes());
        AppState {
            config: Arc::new(config),
            http: reqwest::Client::new(),
            sessions: SessionStore::new(),
            key,
        }
    }
}

// Lets the SignedCookieJar extractor find its signing key in the state.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.key.clone()
    }
}

/// Assembles the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/userArtists", get(api::user_artists))
        .route("/refresh_token", get(api::refresh))
        .route("/health", get(api::health))
        .with_state(state)
}

/// Binds the listener and serves the application until it is stopped.
pub async fn start_server(config: Config, address: &str) {
    let state = AppState::new(config);
    let app = build_router(state);

    let addr = match SocketAddr::from_str(address) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    info!("Listening on http://{}", addr);
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
