//! Reservation record as read from the reservation store.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{Money, PropertyId, ReservationId, TenantId, Timestamp};

/// An immutable rental reservation row.
///
/// Owned by the external booking process; read-only to the aggregation
/// path. `check_in` is a UTC instant and `total_amount` an exact decimal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique reservation identifier.
    pub id: ReservationId,
    /// Owning tenant. Rows from two tenants are never combined.
    pub tenant_id: TenantId,
    /// Property the reservation belongs to, unique within the tenant.
    pub property_id: PropertyId,
    /// Check-in instant, UTC.
    pub check_in: Timestamp,
    /// Total reservation amount at the store's declared scale.
    pub total_amount: Money,
}

impl Reservation {
    /// Create a reservation record.
    #[must_use]
    pub fn new(
        id: ReservationId,
        tenant_id: TenantId,
        property_id: PropertyId,
        check_in: Timestamp,
        total_amount: Money,
    ) -> Self {
        Self {
            id,
            tenant_id,
            property_id,
            check_in,
            total_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reservation_serde_roundtrip() {
        let reservation = Reservation::new(
            ReservationId::new("res-dec-1"),
            TenantId::new("tenant-a"),
            PropertyId::new("prop-001"),
            Timestamp::parse("2024-03-10T14:00:00Z").unwrap(),
            Money::parse("333.333").unwrap(),
        );

        let json = serde_json::to_string(&reservation).unwrap();
        let parsed: Reservation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, reservation);
    }
}
