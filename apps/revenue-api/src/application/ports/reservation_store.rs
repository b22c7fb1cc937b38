//! Reservation Store Port (Driven Port)
//!
//! Interface for reading reservation rows from the external store.

use async_trait::async_trait;

use crate::domain::revenue::Reservation;
use crate::domain::shared::{PropertyId, TenantId, Timestamp};

/// Reservation store error.
///
/// The adapters in this repo follow the empty-result policy and only emit
/// [`ReservationStoreError::Unavailable`]; the not-found variants exist so
/// a store that can distinguish missing entities may report them without a
/// port change.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ReservationStoreError {
    /// Store unreachable or query failed. Never coerced to zero revenue.
    #[error("reservation store unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// The store knows no such tenant.
    #[error("tenant not found: {tenant_id}")]
    TenantNotFound {
        /// The unknown tenant.
        tenant_id: String,
    },

    /// The store knows no such property under the tenant.
    #[error("property not found: {property_id}")]
    PropertyNotFound {
        /// The unknown property.
        property_id: String,
    },
}

/// Port for reading reservations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationStorePort: Send + Sync {
    /// Find every reservation for `(tenant, property)` whose check-in
    /// instant lies in the half-open UTC range `[start, end)`.
    async fn find_reservations(
        &self,
        tenant_id: &TenantId,
        property_id: &PropertyId,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<Reservation>, ReservationStoreError>;
}
