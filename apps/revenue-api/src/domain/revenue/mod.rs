//! Revenue reporting domain: reservations, aggregation, cache keys.

pub mod aggregation;
pub mod cache_key;
pub mod reservation;

pub use aggregation::RevenueAggregationService;
pub use cache_key::{CacheKey, MONTHLY_REVENUE_METRIC};
pub use reservation::Reservation;
