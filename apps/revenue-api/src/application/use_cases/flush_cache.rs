//! Flush Cache Use Case
//!
//! Explicit invalidation for operational tooling, used after data
//! corrections or deployments that change aggregation semantics.

use std::sync::Arc;

use crate::application::dto::FlushOutcomeDto;
use crate::application::ports::CacheStorePort;
use crate::domain::revenue::CacheKey;
use crate::domain::shared::{PropertyId, RevenuePeriod, TenantId};
use crate::error::RevenueError;

/// What to invalidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlushScope {
    /// One `(tenant, property, period)` entry.
    Entry {
        /// Owning tenant.
        tenant_id: TenantId,
        /// Property of the entry.
        property_id: PropertyId,
        /// Period of the entry.
        period: RevenuePeriod,
    },
    /// Every entry belonging to one tenant.
    Tenant(TenantId),
    /// Every entry.
    All,
}

/// Use case clearing cached revenue totals.
pub struct FlushCacheUseCase<C>
where
    C: CacheStorePort,
{
    cache: Arc<C>,
}

impl<C> FlushCacheUseCase<C>
where
    C: CacheStorePort,
{
    /// Create a new use case.
    pub fn new(cache: Arc<C>) -> Self {
        Self { cache }
    }

    /// Execute the flush.
    ///
    /// Unlike the read path, an explicit flush surfaces cache-store
    /// failures: the operator asked for the invalidation and must know it
    /// did not happen.
    ///
    /// # Errors
    ///
    /// Returns [`RevenueError`] with `CACHE_UNAVAILABLE` when the cache
    /// store cannot be reached.
    pub async fn execute(&self, scope: FlushScope) -> Result<FlushOutcomeDto, RevenueError> {
        let keys_removed = match scope {
            FlushScope::Entry {
                tenant_id,
                property_id,
                period,
            } => {
                let key = CacheKey::monthly_revenue(&tenant_id, &property_id, period);
                let removed = self
                    .cache
                    .delete(key.as_str())
                    .await
                    .map_err(|e| RevenueError::cache_unavailable(e.to_string()))?;
                tracing::info!(cache_key = %key, removed, "cache entry flushed");
                u64::from(removed)
            }
            FlushScope::Tenant(tenant_id) => {
                let prefix = CacheKey::tenant_prefix(&tenant_id);
                let removed = self
                    .cache
                    .delete_prefix(&prefix)
                    .await
                    .map_err(|e| RevenueError::cache_unavailable(e.to_string()))?;
                tracing::info!(tenant_id = %tenant_id, removed, "tenant cache flushed");
                removed
            }
            FlushScope::All => {
                let removed = self
                    .cache
                    .clear()
                    .await
                    .map_err(|e| RevenueError::cache_unavailable(e.to_string()))?;
                tracing::info!(removed, "cache cleared");
                removed
            }
        };

        Ok(FlushOutcomeDto { keys_removed })
    }
}
