//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! backend: the OAuth 2.0 authorization-code flow and the authenticated
//! reads for the user's listening statistics. It handles all HTTP
//! communication and maps provider failures onto the application error
//! taxonomy.
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 authorization-code flow for a
//! confidential client:
//! - **Authorize URL**: Pure construction of the provider authorization URL
//! - **Code Exchange**: Exchanges the callback code for an access/refresh
//!   token pair
//! - **Token Refresh**: Obtains a fresh access token from a refresh token
//!
//! ### Stats Module
//!
//! [`stats`] - Authenticated, idempotent reads against the REST API:
//! - `GET /me/top/artists` - Top artists, provider ranking order preserved
//! - `GET /me/top/tracks` - Top tracks as a list of track ids
//! - `GET /audio-features` - Batched per-track feature objects
//! - `GET /me` - The user's profile
//!
//! ## Error Handling
//!
//! Authentication failures carry the raw provider payload
//! ([`crate::error::Error::AuthExchange`] / [`crate::error::Error::AuthRefresh`]);
//! stats failures surface the response status and body as
//! [`crate::error::Error::UpstreamApi`]. There are no automatic retries:
//! a 401 from the stats API means the caller must go through the refresh
//! redirect, not retry here.

pub mod auth;
pub mod stats;
