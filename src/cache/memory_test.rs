// Tests for the in-memory cache adapter.

use std::sync::Arc;

use super::*;
use crate::ports::DictionaryCache;

#[tokio::test]
async fn test_miss_returns_none() {
    let cache = MemoryCache::new();
    assert_eq!(cache.get("kass").await.unwrap(), None);
}

#[tokio::test]
async fn test_set_then_get_returns_the_stored_payload() {
    let cache = MemoryCache::new();
    cache.set("kass", "{\"word\":\"kass\"}").await.unwrap();

    assert_eq!(
        cache.get("kass").await.unwrap(),
        Some("{\"word\":\"kass\"}".to_string())
    );
    assert_eq!(cache.len(), 1);
}

#[tokio::test]
async fn test_set_overwrites_the_previous_payload() {
    let cache = MemoryCache::new();
    cache.set("kass", "first").await.unwrap();
    cache.set("kass", "second").await.unwrap();

    assert_eq!(cache.get("kass").await.unwrap(), Some("second".to_string()));
    assert_eq!(cache.len(), 1);
}

#[tokio::test]
async fn test_keys_are_case_sensitive() {
    let cache = MemoryCache::new();
    cache.set("Kass", "capitalized").await.unwrap();

    assert_eq!(cache.get("kass").await.unwrap(), None);
    assert_eq!(
        cache.get("Kass").await.unwrap(),
        Some("capitalized".to_string())
    );
}

#[tokio::test]
async fn test_shared_across_tasks() {
    let cache = Arc::new(MemoryCache::new());

    let writer = {
        let cache = Arc::clone(&cache);
        tokio::spawn(async move { cache.set("kass", "payload").await })
    };
    writer.await.unwrap().unwrap();

    assert_eq!(cache.get("kass").await.unwrap(), Some("payload".to_string()));
}
