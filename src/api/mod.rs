//! # API Module
//!
//! This module provides the HTTP endpoints served by the Bendify backend.
//! It implements the OAuth login round trip, the main stats view and a
//! health check endpoint.
//!
//! ## Endpoints
//!
//! ### Pages
//!
//! - [`index`] - Landing page with the login link
//! - [`user_artists`] - Main view: requires a valid session token, fetches
//!   the user's listening statistics, classifies them and renders the
//!   result page
//!
//! ### Authentication
//!
//! - [`login`] - Redirects to the provider authorization URL
//! - [`callback`] - Handles the provider redirect; exchanges the
//!   authorization code for tokens and establishes the session
//! - [`refresh`] - Refreshes an expired access token and redirects back
//!   to the stats view
//!
//! ### Monitoring
//!
//! - [`health`] - Health check returning application status and version
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web framework.
//! Handlers receive the shared [`crate::server::AppState`] and the signed
//! session cookie jar through axum extractors; all failure paths map onto
//! [`crate::error::Error`], which implements `IntoResponse`.

mod auth;
mod health;
mod index;
mod stats;

pub use auth::{callback, login, refresh};
pub use health::health;
pub use index::index;
pub use stats::user_artists;
