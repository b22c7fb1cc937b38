//! Persistence Adapters
//!
//! Implementations of the reservation store port. The production store is
//! an external system; only the in-memory adapter ships here.

pub mod in_memory;

pub use in_memory::InMemoryReservationStore;
