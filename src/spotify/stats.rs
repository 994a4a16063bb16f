use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    Res,
    config::Config,
    error::Error,
    types::{
        AudioFeaturesResponse, TimeRange, TopArtistsResponse, TopTracksResponse, TrackFeatures,
        UserProfile,
    },
};

/// Retrieves the authenticated user's top artists.
///
/// Returns artist names in the provider's ranking order. A 401 here means
/// the access token expired or was revoked; the caller is expected to go
/// through the refresh redirect, this function never retries.
pub async fn top_artists(
    client: &Client,
    config: &Config,
    token: &str,
    limit: u32,
    time_range: TimeRange,
) -> Res<Vec<String>> {
    let url = format!(
        "{api}/me/top/artists?offset=0&limit={limit}&time_range={time_range}",
        api = config.api_base_url,
        time_range = time_range.as_str(),
    );

    let response: TopArtistsResponse = get_json(client, &url, token).await?;
    Ok(response.items.into_iter().map(|a| a.name).collect())
}

/// Retrieves the ids of the authenticated user's top tracks, in the
/// provider's ranking order.
pub async fn top_tracks(
    client: &Client,
    config: &Config,
    token: &str,
    limit: u32,
    time_range: TimeRange,
) -> Res<Vec<String>> {
    let url = format!(
        "{api}/me/top/tracks?offset=0&limit={limit}&time_range={time_range}",
        api = config.api_base_url,
        time_range = time_range.as_str(),
    );

    let response: TopTracksResponse = get_json(client, &url, token).await?;
    Ok(response.items.into_iter().map(|t| t.id).collect())
}

/// Retrieves audio features for a batch of tracks in a single request.
///
/// The ids are joined with commas into one query parameter. The returned
/// sequence corresponds positionally to the requested ids and has the same
/// length; tracks with no analyzable features come back as `None` and must
/// be skipped by the aggregation, never substituted with zeros.
pub async fn audio_features(
    client: &Client,
    config: &Config,
    token: &str,
    track_ids: &[String],
) -> Res<Vec<Option<TrackFeatures>>> {
    let url = format!(
        "{api}/audio-features?ids={ids}",
        api = config.api_base_url,
        ids = track_ids.join(","),
    );

    let response: AudioFeaturesResponse = get_json(client, &url, token).await?;
    Ok(response.audio_features)
}

/// Retrieves the authenticated user's profile.
pub async fn profile(client: &Client, config: &Config, token: &str) -> Res<UserProfile> {
    let url = format!("{api}/me", api = config.api_base_url);
    get_json(client, &url, token).await
}

/// Issues an authenticated GET and decodes the JSON body.
///
/// Any non-2xx response is surfaced as [`Error::UpstreamApi`] with the
/// status and the raw body.
async fn get_json<T: DeserializeOwned>(client: &Client, url: &str, token: &str) -> Res<T> {
    let response = client.get(url).bearer_auth(token).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::UpstreamApi {
            status: status.as_u16(),
            body,
        });
    }

    Ok(response.json::<T>().await?)
}
