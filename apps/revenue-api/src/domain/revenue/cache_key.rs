//! Cache key derivation for tenant-scoped metrics.

use std::fmt;

use crate::domain::shared::{PropertyId, RevenuePeriod, TenantId};

/// Metric name for monthly property revenue.
pub const MONTHLY_REVENUE_METRIC: &str = "monthly_revenue";

/// Delimiter between key fields. Escaped inside fields, so distinct
/// `(tenant, metric, property, period)` tuples never collide.
const DELIMITER: char = ':';

/// A derived cache key.
///
/// The key is a total function of every dimension that affects the cached
/// value. The tenant id comes first so all of a tenant's entries share a
/// prefix, which is what tenant-scoped invalidation deletes by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derive the key for a monthly revenue total.
    #[must_use]
    pub fn monthly_revenue(
        tenant_id: &TenantId,
        property_id: &PropertyId,
        period: RevenuePeriod,
    ) -> Self {
        Self::build(
            MONTHLY_REVENUE_METRIC,
            tenant_id,
            property_id,
            &period.label(),
        )
    }

    /// Derive a key from all four dimensions in fixed order.
    #[must_use]
    pub fn build(metric: &str, tenant_id: &TenantId, property_id: &PropertyId, suffix: &str) -> Self {
        Self(format!(
            "{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}",
            escape(tenant_id.as_str()),
            escape(metric),
            escape(property_id.as_str()),
            escape(suffix),
        ))
    }

    /// Prefix shared by every key of one tenant.
    #[must_use]
    pub fn tenant_prefix(tenant_id: &TenantId) -> String {
        format!("{}{DELIMITER}", escape(tenant_id.as_str()))
    }

    /// The key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Percent-escape the delimiter (and the escape character itself) so no
/// field content can introduce a field boundary.
fn escape(field: &str) -> String {
    field.replace('%', "%25").replace(DELIMITER, "%3A")
}
