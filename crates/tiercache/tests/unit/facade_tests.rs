//! Facade re-export tests

use serde_json::json;
use tiercache::CacheEngine;

#[tokio::test]
async fn test_connect_shorthand() {
    let cache = tiercache::connect("memory://").await.unwrap();

    cache.set("user:1", json!({"name": "ada"}), 300).await.unwrap();
    assert_eq!(
        cache.get("user:1").await.unwrap(),
        Some(json!({"name": "ada"}))
    );
    assert_eq!(
        cache.expire("user:*").await.into_result().unwrap(),
        vec!["user:1".to_string()]
    );
}

#[tokio::test]
async fn test_empty_connection_string_never_stores() {
    let cache = tiercache::connect("").await.unwrap();

    cache.set("key", json!(1), 0).await.unwrap();
    assert_eq!(cache.get("key").await.unwrap(), None);
    assert!(cache.expire("key").await.is_ok());
}
