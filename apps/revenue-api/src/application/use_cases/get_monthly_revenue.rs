//! Get Monthly Revenue Use Case
//!
//! The revenue aggregation path: a tenant-scoped cache lookup in front of
//! an exact decimal aggregation over the reservation store. Cache-store
//! failures degrade to direct aggregation; they never reach the caller.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::dto::MonthlyRevenueDto;
use crate::application::ports::{CacheStorePort, ReservationStorePort};
use crate::domain::revenue::{CacheKey, RevenueAggregationService};
use crate::domain::shared::{DomainError, Money, PropertyId, RevenuePeriod, TenantId, Timestamp};
use crate::error::RevenueError;

/// Cached value envelope: the exact decimal total plus its write time.
///
/// The write time is checked on the read side as well, so bounded
/// staleness holds even over a store that ignores TTLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CachedRevenue {
    total: String,
    stored_at: Timestamp,
}

/// Use case computing a tenant-scoped monthly revenue total with
/// memoization.
pub struct GetMonthlyRevenueUseCase<R, C>
where
    R: ReservationStorePort,
    C: CacheStorePort,
{
    reservation_store: Arc<R>,
    cache: Arc<C>,
    cache_ttl: Duration,
}

impl<R, C> GetMonthlyRevenueUseCase<R, C>
where
    R: ReservationStorePort,
    C: CacheStorePort,
{
    /// Create a new use case.
    pub fn new(reservation_store: Arc<R>, cache: Arc<C>, cache_ttl: Duration) -> Self {
        Self {
            reservation_store,
            cache,
            cache_ttl,
        }
    }

    /// Execute the use case: cache lookup, aggregation on miss, write-back.
    ///
    /// Identical arguments over unchanged data return identical decimal
    /// strings whether served from the cache or computed.
    ///
    /// # Errors
    ///
    /// Returns [`RevenueError`] for malformed identifiers or periods and
    /// for reservation-store outages. Cache failures are logged and
    /// absorbed.
    pub async fn execute(
        &self,
        tenant_id: &TenantId,
        property_id: &PropertyId,
        year: i32,
        month: u32,
    ) -> Result<MonthlyRevenueDto, RevenueError> {
        validate_identifier("tenant_id", tenant_id.as_str())?;
        validate_identifier("property_id", property_id.as_str())?;
        let period = RevenuePeriod::new(year, month)?;

        let key = CacheKey::monthly_revenue(tenant_id, property_id, period);

        if let Some(total) = self.read_cached(&key).await {
            tracing::debug!(cache_key = %key, tenant_id = %tenant_id, "cache hit");
            return Ok(Self::dto(tenant_id, property_id, period, total, true));
        }

        let total = self
            .compute(tenant_id, property_id, period)
            .await?
            .to_amount_string();
        self.write_cached(&key, &total).await;

        tracing::debug!(
            cache_key = %key,
            tenant_id = %tenant_id,
            total = %total,
            "computed monthly revenue"
        );
        Ok(Self::dto(tenant_id, property_id, period, total, false))
    }

    /// Aggregate directly from the reservation store.
    ///
    /// Selects rows in the period's half-open UTC range and sums them with
    /// exact decimal addition; no matching rows yields zero.
    async fn compute(
        &self,
        tenant_id: &TenantId,
        property_id: &PropertyId,
        period: RevenuePeriod,
    ) -> Result<Money, RevenueError> {
        let rows = self
            .reservation_store
            .find_reservations(tenant_id, property_id, period.start(), period.end())
            .await?;

        Ok(RevenueAggregationService::sum_amounts(&rows))
    }

    /// Read a fresh cached total, treating every failure as a miss.
    async fn read_cached(&self, key: &CacheKey) -> Option<String> {
        let raw = match self.cache.get(key.as_str()).await {
            Ok(found) => found?,
            Err(e) => {
                tracing::warn!(cache_key = %key, error = %e, "cache get failed, falling back to aggregation");
                return None;
            }
        };

        let cached: CachedRevenue = match serde_json::from_str(&raw) {
            Ok(cached) => cached,
            Err(e) => {
                tracing::warn!(cache_key = %key, error = %e, "cached value undecodable, recomputing");
                return None;
            }
        };

        if !self.is_fresh(&cached) {
            return None;
        }

        // A cached string that no longer parses as an exact decimal is a
        // data-integrity failure; recompute rather than serve it.
        if Money::parse(&cached.total).is_err() {
            tracing::warn!(cache_key = %key, total = %cached.total, "cached total is not a decimal, recomputing");
            return None;
        }

        Some(cached.total)
    }

    /// Write a computed total back to the cache, absorbing failures.
    async fn write_cached(&self, key: &CacheKey, total: &str) {
        let envelope = CachedRevenue {
            total: total.to_string(),
            stored_at: Timestamp::now(),
        };

        let value = match serde_json::to_string(&envelope) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(cache_key = %key, error = %e, "cache envelope encoding failed, skipping write");
                return;
            }
        };

        if let Err(e) = self.cache.set(key.as_str(), &value, self.cache_ttl).await {
            tracing::warn!(cache_key = %key, error = %e, "cache set failed, value served uncached");
        }
    }

    fn is_fresh(&self, cached: &CachedRevenue) -> bool {
        let age = Timestamp::now().duration_since(cached.stored_at);
        // Negative age means clock skew; the entry is at worst brand new.
        chrono::Duration::from_std(self.cache_ttl).is_ok_and(|limit| age <= limit)
    }

    fn dto(
        tenant_id: &TenantId,
        property_id: &PropertyId,
        period: RevenuePeriod,
        total_revenue: String,
        cache_hit: bool,
    ) -> MonthlyRevenueDto {
        MonthlyRevenueDto {
            tenant_id: tenant_id.to_string(),
            property_id: property_id.to_string(),
            period: period.label(),
            total_revenue,
            cache_hit,
        }
    }
}

fn validate_identifier(field: &str, value: &str) -> Result<(), RevenueError> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidValue {
            field: field.to_string(),
            message: "must not be empty".to_string(),
        }
        .into());
    }
    Ok(())
}
