//! Data transfer objects for the revenue aggregation path.

use serde::{Deserialize, Serialize};

/// A computed (or cache-served) monthly revenue total.
///
/// `total_revenue` is the exact decimal string at the store's declared
/// scale, e.g. `"2250.000"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRevenueDto {
    /// Tenant the total belongs to.
    pub tenant_id: String,
    /// Property the total belongs to.
    pub property_id: String,
    /// Canonical period label, e.g. `"2024-03"`.
    pub period: String,
    /// Exact decimal total.
    pub total_revenue: String,
    /// Whether the value was served from the cache.
    pub cache_hit: bool,
}

/// Outcome of an explicit cache flush.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlushOutcomeDto {
    /// Number of cache entries removed.
    pub keys_removed: u64,
}
