//! Cache Adapters
//!
//! Key-value implementations of the cache store port.

pub mod in_memory;

pub use in_memory::{FailingCacheStore, InMemoryCacheStore};
