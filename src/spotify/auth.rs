use reqwest::Client;
use serde_json::Value;

use crate::{Res, config::Config, error::Error, types::TokenResponse};

/// Constructs the provider authorization URL for the login redirect.
///
/// Pure string construction, no network call. Query parameters are the
/// client id, `response_type=code`, the requested scopes, the registered
/// redirect URI and `show_dialog=true` so the provider re-prompts on
/// every login.
///
/// # Example
///
/// ```
/// let url = build_authorize_url(&config, config::SCOPES);
/// // => https://accounts.spotify.com/authorize?client_id=...&response_type=code&...
/// ```
pub fn build_authorize_url(config: &Config, scopes: &str) -> String {
    format!(
        "{auth_url}?client_id={client_id}&response_type=code&scope={scope}&redirect_uri={redirect_uri}&show_dialog=true",
        auth_url = config.auth_url,
        client_id = urlencoding::encode(&config.client_id),
        scope = urlencoding::encode(scopes),
        redirect_uri = urlencoding::encode(&config.redirect_uri),
    )
}

/// Exchanges an authorization code for an access/refresh token pair.
///
/// Completes the OAuth 2.0 authorization-code flow by POSTing an
/// `authorization_code` grant to the provider token endpoint. The code is
/// single-use and short-lived, so the exchange happens immediately in the
/// callback handler.
///
/// # Errors
///
/// Returns [`Error::AuthExchange`] carrying the raw provider payload when
/// the response is non-2xx or the body contains an `error` field.
pub async fn exchange_code(client: &Client, config: &Config, code: &str) -> Res<TokenResponse> {
    let response = client
        .post(&config.token_url)
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &config.redirect_uri),
            ("client_id", &config.client_id),
            ("client_secret", &config.client_secret),
        ])
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(Error::AuthExchange(body));
    }

    parse_token_response(&body).ok_or(Error::AuthExchange(body))
}

/// Exchanges a refresh token for a fresh access token.
///
/// POSTs a `refresh_token` grant to the provider token endpoint. The
/// provider may omit a new refresh token in the response; the caller is
/// expected to retain the prior one in that case.
///
/// # Errors
///
/// Returns [`Error::AuthRefresh`] carrying the raw provider payload when
/// the response is non-2xx or the body contains an `error` field.
pub async fn refresh(client: &Client, config: &Config, refresh_token: &str) -> Res<TokenResponse> {
    let response = client
        .post(&config.token_url)
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", &config.client_id),
            ("client_secret", &config.client_secret),
        ])
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(Error::AuthRefresh(body));
    }

    parse_token_response(&body).ok_or(Error::AuthRefresh(body))
}

/// Parses a token endpoint response body, rejecting payloads that carry
/// a provider `error` field even under a 2xx status.
fn parse_token_response(body: &str) -> Option<TokenResponse> {
    let json: Value = serde_json::from_str(body).ok()?;
    if json.get("error").is_some() {
        return None;
    }
    serde_json::from_value(json).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            client_id: "my client".to_string(),
            client_secret: "secret".to_string(),
            session_secret: "s".repeat(64),
            redirect_uri: "http://localhost:5000/callback".to_string(),
            auth_url: "https://accounts.spotify.com/authorize".to_string(),
            token_url: "https://accounts.spotify.com/api/token".to_string(),
            api_base_url: "https://api.spotify.com/v1".to_string(),
        }
    }

    #[test]
    fn test_authorize_url_contains_required_params() {
        let url = build_authorize_url(&test_config(), "user-read-private user-top-read");

        assert!(url.starts_with("https://accounts.spotify.com/authorize?"));
        assert!(url.contains("client_id=my%20client"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("scope=user-read-private%20user-top-read"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A5000%2Fcallback"));
        assert!(url.contains("show_dialog=true"));
    }

    #[test]
    fn test_parse_token_response_success() {
        let body = r#"{"access_token":"a","refresh_token":"r","expires_in":3600}"#;
        let token = parse_token_response(body).unwrap();
        assert_eq!(token.access_token, "a");
        assert_eq!(token.refresh_token.as_deref(), Some("r"));
        assert_eq!(token.expires_in, 3600);
    }

    #[test]
    fn test_parse_token_response_without_refresh_token() {
        let body = r#"{"access_token":"a","expires_in":3600}"#;
        let token = parse_token_response(body).unwrap();
        assert!(token.refresh_token.is_none());
    }

    #[test]
    fn test_parse_token_response_rejects_error_payload() {
        let body = r#"{"error":"invalid_grant","error_description":"Invalid authorization code"}"#;
        assert!(parse_token_response(body).is_none());
    }
}
