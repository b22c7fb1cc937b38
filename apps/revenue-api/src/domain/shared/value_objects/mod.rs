//! Shared value objects.

pub mod identifiers;
pub mod money;
pub mod period;
pub mod timestamp;

pub use identifiers::{PropertyId, ReservationId, TenantId};
pub use money::{AMOUNT_SCALE, Money};
pub use period::RevenuePeriod;
pub use timestamp::Timestamp;
