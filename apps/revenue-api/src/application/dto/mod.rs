//! Data transfer objects for API boundaries.

pub mod revenue_dto;

pub use revenue_dto::{FlushOutcomeDto, MonthlyRevenueDto};
