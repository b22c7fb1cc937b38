// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Revenue API - Rust Core Library
//!
//! Multi-tenant monthly revenue aggregation service for the Rentfolio
//! property platform.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (value objects, domain services)
//!   - `shared`: `Money`, identifiers, `Timestamp`, `RevenuePeriod`
//!   - `revenue`: `Reservation`, aggregation service, cache-key derivation
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interfaces for external systems (`ReservationStorePort`, `CacheStorePort`)
//!   - `use_cases`: `GetMonthlyRevenue`, `FlushCache`
//!   - `dto`: Data transfer objects for API boundaries
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: Reservation store (in-memory)
//!   - `cache`: Cache store (in-memory)
//!   - `http`: Axum REST controller
//!
//! # Correctness Concerns
//!
//! Three invariants run through every layer: cache keys are scoped by
//! tenant before anything else, month membership is decided on the UTC
//! instant against a half-open range, and currency totals are exact
//! decimal sums rendered at a fixed scale.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Service-level error taxonomy with HTTP status mapping.
pub mod error;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::revenue::{CacheKey, Reservation, RevenueAggregationService};
pub use domain::shared::{
    DomainError, Money, PropertyId, ReservationId, RevenuePeriod, TenantId, Timestamp,
};

// Application re-exports
pub use application::dto::{FlushOutcomeDto, MonthlyRevenueDto};
pub use application::ports::{
    CacheStoreError, CacheStorePort, ReservationStoreError, ReservationStorePort,
};
pub use application::use_cases::{FlushCacheUseCase, FlushScope, GetMonthlyRevenueUseCase};

// Infrastructure re-exports
pub use error::{ErrorCode, HttpErrorResponse, RevenueError};
pub use infrastructure::cache::{FailingCacheStore, InMemoryCacheStore};
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::persistence::InMemoryReservationStore;
