//! In-memory cache store.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::application::ports::{CacheStoreError, CacheStorePort};

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    stored_at: Instant,
    ttl: Duration,
}

impl Entry {
    fn is_expired(&self) -> bool {
        self.stored_at.elapsed() >= self.ttl
    }
}

/// In-memory implementation of [`CacheStorePort`].
///
/// Per-key TTL with lazy expiry on read. Constructed once at process start
/// and shared behind an `Arc`; a single `set` is atomic under the lock.
#[derive(Debug, Default)]
pub struct InMemoryCacheStore {
    entries: RwLock<HashMap<String, Entry>>,
}

impl InMemoryCacheStore {
    /// Create a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of entries, including not-yet-collected expired ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CacheStorePort for InMemoryCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheStoreError> {
        {
            let entries = self.entries.read().unwrap();
            match entries.get(key) {
                Some(entry) if !entry.is_expired() => return Ok(Some(entry.value.clone())),
                Some(_) => {}
                None => return Ok(None),
            }
        }
        // Expired: collect it under the write lock.
        self.entries.write().unwrap().remove(key);
        Ok(None)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheStoreError> {
        let entry = Entry {
            value: value.to_string(),
            stored_at: Instant::now(),
            ttl,
        };
        self.entries.write().unwrap().insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheStoreError> {
        Ok(self.entries.write().unwrap().remove(key).is_some())
    }

    async fn delete_prefix(&self, prefix: &str) -> Result<u64, CacheStoreError> {
        let mut entries = self.entries.write().unwrap();
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        Ok((before - entries.len()) as u64)
    }

    async fn clear(&self) -> Result<u64, CacheStoreError> {
        let mut entries = self.entries.write().unwrap();
        let removed = entries.len() as u64;
        entries.clear();
        Ok(removed)
    }
}

/// Cache store that fails every operation.
///
/// Exercises the fail-open path in tests: the read side must degrade to
/// direct aggregation when the store misbehaves.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingCacheStore;

impl FailingCacheStore {
    fn unavailable() -> CacheStoreError {
        CacheStoreError::Unavailable {
            message: "cache store is down".to_string(),
        }
    }
}

#[async_trait]
impl CacheStorePort for FailingCacheStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, CacheStoreError> {
        Err(Self::unavailable())
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<(), CacheStoreError> {
        Err(Self::unavailable())
    }

    async fn delete(&self, _key: &str) -> Result<bool, CacheStoreError> {
        Err(Self::unavailable())
    }

    async fn delete_prefix(&self, _prefix: &str) -> Result<u64, CacheStoreError> {
        Err(Self::unavailable())
    }

    async fn clear(&self) -> Result<u64, CacheStoreError> {
        Err(Self::unavailable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(300);

    #[tokio::test]
    async fn set_then_get() {
        let cache = InMemoryCacheStore::new();
        cache.set("k1", "v1", TTL).await.unwrap();

        assert_eq!(cache.get("k1").await.unwrap(), Some("v1".to_string()));
        assert_eq!(cache.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn expired_entry_reads_as_miss() {
        let cache = InMemoryCacheStore::new();
        cache.set("k1", "v1", Duration::ZERO).await.unwrap();

        assert_eq!(cache.get("k1").await.unwrap(), None);
        // Lazy expiry removed the entry.
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn set_overwrites_existing_value() {
        let cache = InMemoryCacheStore::new();
        cache.set("k1", "old", TTL).await.unwrap();
        cache.set("k1", "new", TTL).await.unwrap();

        assert_eq!(cache.get("k1").await.unwrap(), Some("new".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn delete_reports_presence() {
        let cache = InMemoryCacheStore::new();
        cache.set("k1", "v1", TTL).await.unwrap();

        assert!(cache.delete("k1").await.unwrap());
        assert!(!cache.delete("k1").await.unwrap());
    }

    #[tokio::test]
    async fn delete_prefix_only_touches_matching_keys() {
        let cache = InMemoryCacheStore::new();
        cache.set("tenant-a:x", "1", TTL).await.unwrap();
        cache.set("tenant-a:y", "2", TTL).await.unwrap();
        cache.set("tenant-ab:z", "3", TTL).await.unwrap();

        let removed = cache.delete_prefix("tenant-a:").await.unwrap();

        assert_eq!(removed, 2);
        assert_eq!(cache.get("tenant-ab:z").await.unwrap(), Some("3".to_string()));
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let cache = InMemoryCacheStore::new();
        cache.set("k1", "v1", TTL).await.unwrap();
        cache.set("k2", "v2", TTL).await.unwrap();

        assert_eq!(cache.clear().await.unwrap(), 2);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn failing_store_errors_on_every_operation() {
        let cache = FailingCacheStore;
        assert!(cache.get("k").await.is_err());
        assert!(cache.set("k", "v", TTL).await.is_err());
        assert!(cache.delete("k").await.is_err());
        assert!(cache.delete_prefix("k").await.is_err());
        assert!(cache.clear().await.is_err());
    }
}
