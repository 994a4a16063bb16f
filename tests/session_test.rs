use bendify::session::{SessionStore, TokenRecord};
use bendify::types::TokenResponse;

fn record(access_token: &str) -> TokenRecord {
    TokenRecord::new(
        TokenResponse {
            access_token: access_token.to_string(),
            refresh_token: Some("refresh".to_string()),
            expires_in: 3600,
        },
        1_000,
    )
}

#[tokio::test]
async fn test_put_then_get_returns_record() {
    let store = SessionStore::new();
    store.put("abc".to_string(), record("token-a")).await;

    let found = store.get("abc").await.unwrap();
    assert_eq!(found.access_token, "token-a");
    assert_eq!(found.expires_at, 4_600);
}

#[tokio::test]
async fn test_get_unknown_session_is_absent() {
    let store = SessionStore::new();
    assert!(store.get("missing").await.is_none());
}

#[tokio::test]
async fn test_put_overwrites_existing_record() {
    let store = SessionStore::new();
    store.put("abc".to_string(), record("old")).await;
    store.put("abc".to_string(), record("new")).await;

    let found = store.get("abc").await.unwrap();
    assert_eq!(found.access_token, "new");
}

#[tokio::test]
async fn test_clear_removes_session() {
    let store = SessionStore::new();
    store.put("abc".to_string(), record("token-a")).await;
    store.clear("abc").await;

    assert!(store.get("abc").await.is_none());
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let store = SessionStore::new();
    store.put("one".to_string(), record("token-1")).await;
    store.put("two".to_string(), record("token-2")).await;
    store.clear("one").await;

    assert!(store.get("one").await.is_none());
    assert_eq!(store.get("two").await.unwrap().access_token, "token-2");
}

#[tokio::test]
async fn test_clones_share_the_same_map() {
    let store = SessionStore::new();
    let clone = store.clone();
    clone.put("abc".to_string(), record("shared")).await;

    assert_eq!(store.get("abc").await.unwrap().access_token, "shared");
}
