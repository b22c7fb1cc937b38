//! HTTP response types.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Monthly revenue response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRevenueResponse {
    /// Exact decimal total at the store's declared scale, e.g. `"2250.000"`.
    pub total_revenue: String,
    /// Property the total belongs to.
    pub property_id: String,
    /// Canonical period label, e.g. `"2024-03"`.
    pub period: String,
}

/// Cache flush response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlushCacheResponse {
    /// Whether the flush completed.
    pub flushed: bool,
    /// Number of cache entries removed.
    pub keys_removed: u64,
}
