//! Application ports: interfaces to external systems.

pub mod cache_store;
pub mod reservation_store;

pub use cache_store::{CacheStoreError, CacheStorePort};
pub use reservation_store::{ReservationStoreError, ReservationStorePort};

#[cfg(test)]
pub use cache_store::MockCacheStorePort;
#[cfg(test)]
pub use reservation_store::MockReservationStorePort;
