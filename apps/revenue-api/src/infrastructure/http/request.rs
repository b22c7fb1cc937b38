//! HTTP request types.

use serde::{Deserialize, Serialize};

/// Request for a monthly revenue total.
///
/// `tenant_id` arrives already authenticated by the upstream
/// tenant-resolution middleware; this service trusts it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRevenueRequest {
    /// Resolved tenant identifier.
    pub tenant_id: String,
    /// Property identifier, unique within the tenant.
    pub property_id: String,
    /// Calendar year of the period.
    pub year: i32,
    /// Calendar month of the period (1-12).
    pub month: u32,
}

/// Request to flush cached totals.
///
/// All fields present selects one entry; `tenant_id` alone flushes the
/// tenant; an empty body flushes everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlushCacheRequest {
    /// Tenant scope, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// Property of a single entry to flush.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    /// Year of a single entry to flush.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Month of a single entry to flush.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monthly_revenue_request_deserializes() {
        let json = r#"{"tenant_id":"tenant-a","property_id":"prop-001","year":2024,"month":3}"#;
        let request: MonthlyRevenueRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.tenant_id, "tenant-a");
        assert_eq!(request.month, 3);
    }

    #[test]
    fn flush_request_fields_are_optional() {
        let request: FlushCacheRequest = serde_json::from_str("{}").unwrap();
        assert!(request.tenant_id.is_none());
        assert!(request.property_id.is_none());
    }
}
