//! In-memory reservation store for testing and development.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::application::ports::{ReservationStoreError, ReservationStorePort};
use crate::domain::revenue::Reservation;
use crate::domain::shared::{PropertyId, TenantId, Timestamp};

/// In-memory implementation of [`ReservationStorePort`].
///
/// Follows the empty-result policy: an unknown tenant or property simply
/// matches no rows. Suitable for testing and development.
#[derive(Debug, Default)]
pub struct InMemoryReservationStore {
    reservations: RwLock<Vec<Reservation>>,
}

impl InMemoryReservationStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            reservations: RwLock::new(Vec::new()),
        }
    }

    /// Add a reservation (for test setup and local runs).
    pub fn add(&self, reservation: Reservation) {
        self.reservations.write().unwrap().push(reservation);
    }

    /// Replace all reservations at once.
    pub fn seed(&self, reservations: Vec<Reservation>) {
        *self.reservations.write().unwrap() = reservations;
    }

    /// Get the number of stored reservations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reservations.read().unwrap().len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ReservationStorePort for InMemoryReservationStore {
    async fn find_reservations(
        &self,
        tenant_id: &TenantId,
        property_id: &PropertyId,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<Reservation>, ReservationStoreError> {
        let reservations = self.reservations.read().unwrap();
        Ok(reservations
            .iter()
            .filter(|r| {
                r.tenant_id == *tenant_id
                    && r.property_id == *property_id
                    && start <= r.check_in
                    && r.check_in < end
            })
            .cloned()
            .collect())
    }
}
