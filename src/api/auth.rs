use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, SignedCookieJar};
use serde_json::json;

use crate::{
    config, error::Error, server::AppState, session, session::TokenRecord, spotify, success,
};

/// Redirects the user to the provider authorization URL.
pub async fn login(State(state): State<AppState>) -> Redirect {
    let auth_url = spotify::auth::build_authorize_url(&state.config, config::SCOPES);
    Redirect::to(&auth_url)
}

/// Handles the provider redirect after the user granted or denied access.
///
/// An `error` parameter is surfaced to the caller as-is without attempting
/// the exchange. A `code` parameter is exchanged for tokens; the session is
/// established by storing the record server-side and handing the client a
/// signed session-id cookie. A callback with neither is malformed.
pub async fn callback(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, Error> {
    if let Some(error) = params.get("error") {
        return Ok(Json(json!({ "error": error })).into_response());
    }

    let Some(code) = params.get("code") else {
        return Err(Error::MalformedCallback);
    };

    let token = spotify::auth::exchange_code(&state.http, &state.config, code).await?;
    let record = TokenRecord::new(token, session::now_timestamp());

    let session_id = session::new_session_id();
    state.sessions.put(session_id.clone(), record).await;
    success!("Session established: {}", session_id);

    let cookie = Cookie::build((session::SESSION_COOKIE, session_id))
        .path("/")
        .http_only(true);

    Ok((jar.add(cookie), Redirect::to("/userArtists")).into_response())
}

/// Refreshes the session's access token and redirects to the stats view.
///
/// Reaching this endpoint with a token that has not expired yet is treated
/// as a malformed request rather than silently producing no response.
pub async fn refresh(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<Response, Error> {
    let Some((session_id, mut record)) = lookup_session(&state, &jar).await else {
        return Ok(Redirect::to("/login").into_response());
    };

    let Some(refresh_token) = record.refresh_token.clone() else {
        return Ok(Redirect::to("/login").into_response());
    };

    let now = session::now_timestamp();
    if !record.is_expired(now) {
        return Err(Error::MalformedCallback);
    }

    let token = spotify::auth::refresh(&state.http, &state.config, &refresh_token).await?;
    record.apply_refresh(token, now);
    state.sessions.put(session_id, record).await;

    Ok(Redirect::to("/userArtists").into_response())
}

/// Resolves the signed session cookie to the stored token record.
pub(crate) async fn lookup_session(
    state: &AppState,
    jar: &SignedCookieJar,
) -> Option<(String, TokenRecord)> {
    let session_id = jar.get(session::SESSION_COOKIE)?.value().to_string();
    let record = state.sessions.get(&session_id).await?;
    Some((session_id, record))
}
