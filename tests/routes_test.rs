use axum::{Router, body::Body, response::Response};
use http::{Request, StatusCode, header};
use tower::util::ServiceExt;

use bendify::{
    config::Config,
    server::{AppState, build_router},
};

// Helper function to create a config that never reaches the real provider.
// The endpoints point at an unroutable loopback port so any accidental
// upstream call fails immediately instead of leaving the test machine.
fn test_config() -> Config {
    Config {
        client_id: "test-client".to_string(),
        client_secret: "test-secret".to_string(),
        session_secret: "0123456789abcdef".repeat(4),
        redirect_uri: "http://localhost:5000/callback".to_string(),
        auth_url: "https://accounts.spotify.com/authorize".to_string(),
        token_url: "http://127.0.0.1:1/api/token".to_string(),
        api_base_url: "http://127.0.0.1:1/v1".to_string(),
    }
}

fn test_app() -> Router {
    build_router(AppState::new(test_config()))
}

async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_unauthenticated_user_artists_redirects_to_login() {
    let response = get(test_app(), "/userArtists").await;

    // Redirect, no upstream calls made
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
}

#[tokio::test]
async fn test_callback_with_provider_error_returns_payload() {
    let response = get(test_app(), "/callback?error=access_denied").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert_eq!(body, r#"{"error":"access_denied"}"#);
}

#[tokio::test]
async fn test_callback_without_code_or_error_is_bad_request() {
    let response = get(test_app(), "/callback").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert!(body.contains("malformed callback"));
}

#[tokio::test]
async fn test_login_redirects_to_authorize_url() {
    let response = get(test_app(), "/login").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    assert!(location.starts_with("https://accounts.spotify.com/authorize?"));
    assert!(location.contains("client_id=test-client"));
    assert!(location.contains("response_type=code"));
    assert!(location.contains("scope=user-read-private%20user-read-email%20user-top-read"));
    assert!(location.contains("show_dialog=true"));
}

#[tokio::test]
async fn test_refresh_without_session_redirects_to_login() {
    let response = get(test_app(), "/refresh_token").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
}

#[tokio::test]
async fn test_landing_page_links_to_login() {
    let response = get(test_app(), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("/login"));
}

#[tokio::test]
async fn test_health_reports_ok() {
    let response = get(test_app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains(r#""status":"ok""#));
}
