//! Keeps GET responses for a revalidation window.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::Value;
use tokio::sync::RwLock;

/// How a GET may be answered from the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Always ask the API; never store the response.
    NoStore,
    /// Reuse a stored response younger than the window.
    Revalidate(Duration),
    /// Reuse any stored response.
    ForceCache,
}

/// Entries kept at most; the oldest go first once full.
pub const DEFAULT_CAPACITY: usize = 1024;

struct CachedResponse {
    stored_at: Instant,
    policy: CachePolicy,
    body: Value,
}

impl CachedResponse {
    fn is_expired(&self) -> bool {
        match self.policy {
            CachePolicy::Revalidate(window) => self.stored_at.elapsed() >= window,
            CachePolicy::NoStore | CachePolicy::ForceCache => false,
        }
    }
}

/// Response bodies keyed by request URL, shared between client clones.
#[derive(Clone)]
pub struct ResponseCache {
    entries: Arc<RwLock<HashMap<String, CachedResponse>>>,
    capacity: usize,
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Arc::default(),
            capacity: capacity.max(1),
        }
    }

    pub async fn lookup(&self, url: &str, policy: CachePolicy) -> Option<Value> {
        let entries = self.entries.read().await;
        let cached = entries.get(url)?;
        match policy {
            CachePolicy::NoStore => None,
            CachePolicy::ForceCache => Some(cached.body.clone()),
            CachePolicy::Revalidate(window) => {
                (cached.stored_at.elapsed() < window).then(|| cached.body.clone())
            }
        }
    }

    pub async fn store(&self, url: &str, policy: CachePolicy, body: &Value) {
        if policy == CachePolicy::NoStore {
            return;
        }
        let mut entries = self.entries.write().await;
        entries.retain(|_, cached| !cached.is_expired());

        while entries.len() >= self.capacity && !entries.contains_key(url) {
            let oldest = entries
                .iter()
                .min_by_key(|(_, cached)| cached.stored_at)
                .map(|(key, _)| key.clone());
            match oldest {
                Some(key) => entries.remove(&key),
                None => break,
            };
        }

        entries.insert(
            url.to_string(),
            CachedResponse {
                stored_at: Instant::now(),
                policy,
                body: body.clone(),
            },
        );
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn no_store_skips_the_cache() {
        let cache = ResponseCache::new();
        cache.store("u", CachePolicy::NoStore, &json!([1])).await;
        assert!(cache.is_empty().await);
        assert_eq!(cache.lookup("u", CachePolicy::ForceCache).await, None);
    }

    #[tokio::test]
    async fn revalidate_serves_fresh_entries() {
        let cache = ResponseCache::new();
        let policy = CachePolicy::Revalidate(Duration::from_secs(60));
        cache.store("u", policy, &json!({"a": 1})).await;
        assert_eq!(cache.lookup("u", policy).await, Some(json!({"a": 1})));
        assert_eq!(cache.lookup("u", CachePolicy::NoStore).await, None);
    }

    #[tokio::test]
    async fn stale_entries_are_refetched() {
        let cache = ResponseCache::new();
        cache.store("u", CachePolicy::ForceCache, &json!(1)).await;
        tokio::time::sleep(Duration::from_millis(5)).await;

        let expired = CachePolicy::Revalidate(Duration::from_millis(1));
        assert_eq!(cache.lookup("u", expired).await, None);
        assert_eq!(cache.lookup("u", CachePolicy::ForceCache).await, Some(json!(1)));
    }

    #[tokio::test]
    async fn store_drops_expired_entries() {
        let cache = ResponseCache::new();
        let short = CachePolicy::Revalidate(Duration::from_millis(1));
        for page in 0..200 {
            cache.store(&format!("jobs?offset={page}"), short, &json!([])).await;
        }
        cache.store("filters", CachePolicy::ForceCache, &json!({})).await;
        tokio::time::sleep(Duration::from_millis(10)).await;

        cache.store("jobs?offset=0", short, &json!([])).await;
        assert_eq!(cache.len().await, 2);
        assert_eq!(cache.lookup("filters", CachePolicy::ForceCache).await, Some(json!({})));
    }

    #[tokio::test]
    async fn capacity_evicts_oldest_entry() {
        let cache = ResponseCache::with_capacity(2);
        let policy = CachePolicy::Revalidate(Duration::from_secs(60));
        cache.store("a", policy, &json!(1)).await;
        tokio::time::sleep(Duration::from_millis(2)).await;
        cache.store("b", policy, &json!(2)).await;
        tokio::time::sleep(Duration::from_millis(2)).await;
        cache.store("c", policy, &json!(3)).await;

        assert_eq!(cache.len().await, 2);
        assert_eq!(cache.lookup("a", policy).await, None);
        assert_eq!(cache.lookup("c", policy).await, Some(json!(3)));

        cache.store("c", policy, &json!(4)).await;
        assert_eq!(cache.lookup("b", policy).await, Some(json!(2)));
    }

    #[tokio::test]
    async fn clear_drops_everything() {
        let cache = ResponseCache::new();
        cache.store("a", CachePolicy::ForceCache, &json!(1)).await;
        cache.store("b", CachePolicy::ForceCache, &json!(2)).await;
        assert_eq!(cache.len().await, 2);
        cache.clear().await;
        assert!(cache.is_empty().await);
    }
}
