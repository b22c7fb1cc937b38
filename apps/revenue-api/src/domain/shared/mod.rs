//! Shared domain primitives: value objects and domain errors.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::{AMOUNT_SCALE, Money, PropertyId, ReservationId, RevenuePeriod, TenantId, Timestamp};
