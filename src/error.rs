use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::view;

/// Application-wide error taxonomy.
///
/// Provider-side authentication failures keep the raw error payload so it
/// can be surfaced to the user unchanged. Upstream API failures during
/// stats fetching carry the status and body of the offending response.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Authorization-code exchange failed: {0}")]
    AuthExchange(String),

    #[error("Refresh-token exchange failed: {0}")]
    AuthRefresh(String),

    #[error("Upstream API error (status {status}): {body}")]
    UpstreamApi { status: u16, body: String },

    #[error("Malformed callback request")]
    MalformedCallback,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::Config(err.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::AuthExchange(payload) | Error::AuthRefresh(payload) => {
                (StatusCode::BAD_GATEWAY, payload).into_response()
            }
            Error::UpstreamApi { status, body } => (
                StatusCode::BAD_GATEWAY,
                Html(view::render_error(status, &body)),
            )
                .into_response(),
            Error::MalformedCallback => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "malformed callback" })),
            )
                .into_response(),
            Error::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
            Error::Http(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        }
    }
}
