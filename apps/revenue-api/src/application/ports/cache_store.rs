//! Cache Store Port (Driven Port)
//!
//! Key-value interface in front of the aggregation path. A single `set`
//! is atomic per key; no cross-key transaction is assumed.

use std::time::Duration;

use async_trait::async_trait;

/// Cache store error.
///
/// Never user-visible: the read path falls back to direct aggregation when
/// the store misbehaves.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CacheStoreError {
    /// Store unreachable or operation failed.
    #[error("cache store unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// A stored value could not be encoded or decoded.
    #[error("cache serialization failed: {message}")]
    Serialization {
        /// Error details.
        message: String,
    },
}

/// Port for the external key-value cache.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheStorePort: Send + Sync {
    /// Look up a stored value.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheStoreError>;

    /// Store a value with a time-to-live.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheStoreError>;

    /// Remove one key; returns true if the key existed. Removing an
    /// absent key is not an error.
    async fn delete(&self, key: &str) -> Result<bool, CacheStoreError>;

    /// Remove every key starting with `prefix`; returns the removed count.
    async fn delete_prefix(&self, prefix: &str) -> Result<u64, CacheStoreError>;

    /// Remove every key; returns the removed count.
    async fn clear(&self) -> Result<u64, CacheStoreError>;
}
