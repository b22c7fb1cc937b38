//! Application use cases.

pub mod flush_cache;
pub mod get_monthly_revenue;

pub use flush_cache::{FlushCacheUseCase, FlushScope};
pub use get_monthly_revenue::GetMonthlyRevenueUseCase;
