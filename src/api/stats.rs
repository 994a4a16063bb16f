use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;

use crate::{
    api::auth::lookup_session,
    classify::{self, FeatureTotals},
    error::Error,
    server::AppState,
    session,
    spotify::stats,
    types::TimeRange,
    view::BendingView,
};

const TOP_ARTISTS_LIMIT: u32 = 10;
const TOP_TRACKS_LIMIT: u32 = 30;

/// The main view: fetches the user's listening statistics, classifies
/// them and renders the result page.
///
/// Without a session the request is redirected to `/login`; with an
/// expired token it is redirected to `/refresh_token`. The expiry check
/// and the subsequent fetches are not atomic against parallel requests
/// in the same session.
pub async fn user_artists(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<Response, Error> {
    let Some((_, record)) = lookup_session(&state, &jar).await else {
        return Ok(Redirect::to("/login").into_response());
    };

    if record.access_token.is_empty() {
        return Ok(Redirect::to("/login").into_response());
    }

    if record.is_expired(session::now_timestamp()) {
        return Ok(Redirect::to("/refresh_token").into_response());
    }

    let token = &record.access_token;
    let artists = stats::top_artists(
        &state.http,
        &state.config,
        token,
        TOP_ARTISTS_LIMIT,
        TimeRange::Short,
    )
    .await?;

    let track_ids = stats::top_tracks(
        &state.http,
        &state.config,
        token,
        TOP_TRACKS_LIMIT,
        TimeRange::Short,
    )
    .await?;

    let features = stats::audio_features(&state.http, &state.config, token, &track_ids).await?;
    let totals = FeatureTotals::accumulate(&features);
    let element = classify::classify(&totals);

    let profile = stats::profile(&state.http, &state.config, token).await?;

    let view = BendingView::build(&totals, element, profile.display_name, artists);
    Ok(Html(view.render()).into_response())
}
