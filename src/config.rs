//! Configuration management for the Bendify backend.
//!
//! This module handles loading configuration values from environment
//! variables and `.env` files. All values are collected once at startup
//! into an immutable [`Config`] struct that is injected into the server
//! state, so request handlers never touch the process environment.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. Application defaults for the Spotify endpoints

use std::env;

use crate::{Res, error::Error};

/// Default authorization endpoint of the provider.
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
/// Default token-exchange endpoint of the provider.
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
/// Default base URL of the provider's REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.spotify.com/v1";
/// Development redirect URI, must match the provider app registration.
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:5000/callback";

/// OAuth scopes requested during login.
pub const SCOPES: &str = "user-read-private user-read-email user-top-read";

/// Loads environment variables from a `.env` file in the working directory.
///
/// Missing files are not an error; in that case configuration comes from
/// the process environment alone.
pub fn load_env() {
    let _ = dotenv::dotenv();
}

/// Immutable application configuration.
///
/// Built once at startup via [`Config::from_env`] and shared behind an
/// `Arc` in the server state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Spotify application client ID.
    pub client_id: String,
    /// Spotify application client secret.
    pub client_secret: String,
    /// Secret key used to sign the session cookie. Must be at least
    /// 64 bytes long.
    pub session_secret: String,
    /// Redirect URI registered with the provider.
    pub redirect_uri: String,
    /// Provider authorization endpoint.
    pub auth_url: String,
    /// Provider token-exchange endpoint.
    pub token_url: String,
    /// Provider REST API base URL.
    pub api_base_url: String,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// `CLIENT_ID`, `CLIENT_SECRET` and `SESSION_SECRET_KEY` are required;
    /// the provider endpoints and redirect URI fall back to the development
    /// defaults when their override variables are unset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a required variable is missing or the
    /// session secret is too short to derive a cookie signing key.
    pub fn from_env() -> Res<Self> {
        let client_id = require("CLIENT_ID")?;
        let client_secret = require("CLIENT_SECRET")?;
        let session_secret = require("SESSION_SECRET_KEY")?;

        if session_secret.len() < 64 {
            return Err(Error::Config(
                "SESSION_SECRET_KEY must be at least 64 bytes".to_string(),
            ));
        }

        Ok(Config {
            client_id,
            client_secret,
            session_secret,
            redirect_uri: env::var("REDIRECT_URI")
                .unwrap_or_else(|_| DEFAULT_REDIRECT_URI.to_string()),
            auth_url: env::var("SPOTIFY_AUTH_URL").unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string()),
            token_url: env::var("SPOTIFY_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
            api_base_url: env::var("SPOTIFY_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
        })
    }
}

fn require(name: &str) -> Res<String> {
    env::var(name).map_err(|_| Error::Config(format!("{} must be set", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_var_is_config_error() {
        // Deliberately not set in the test environment
        let err = require("BENDIFY_DOES_NOT_EXIST").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("BENDIFY_DOES_NOT_EXIST"));
    }
}
