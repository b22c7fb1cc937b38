//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to application use cases.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::application::ports::{CacheStorePort, ReservationStorePort};
use crate::application::use_cases::{FlushCacheUseCase, FlushScope, GetMonthlyRevenueUseCase};
use crate::domain::shared::{PropertyId, RevenuePeriod, TenantId};
use crate::error::RevenueError;

use super::request::{FlushCacheRequest, MonthlyRevenueRequest};
use super::response::{FlushCacheResponse, HealthResponse, MonthlyRevenueResponse};

/// Application state shared across handlers.
pub struct AppState<R, C>
where
    R: ReservationStorePort,
    C: CacheStorePort,
{
    /// Use case for monthly revenue totals.
    pub get_monthly_revenue: Arc<GetMonthlyRevenueUseCase<R, C>>,
    /// Use case for explicit cache invalidation.
    pub flush_cache: Arc<FlushCacheUseCase<C>>,
    /// Application version.
    pub version: String,
}

impl<R, C> Clone for AppState<R, C>
where
    R: ReservationStorePort,
    C: CacheStorePort,
{
    fn clone(&self) -> Self {
        Self {
            get_monthly_revenue: Arc::clone(&self.get_monthly_revenue),
            flush_cache: Arc::clone(&self.flush_cache),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<R, C>(state: AppState<R, C>) -> Router
where
    R: ReservationStorePort + 'static,
    C: CacheStorePort + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/monthly-revenue", post(monthly_revenue))
        .route("/api/v1/flush-cache", post(flush_cache))
        .with_state(state)
}

fn error_response(err: &RevenueError) -> Response {
    (err.code().http_status(), Json(err.to_http_response())).into_response()
}

/// Health check endpoint.
async fn health_check<R, C>(State(state): State<AppState<R, C>>) -> impl IntoResponse
where
    R: ReservationStorePort,
    C: CacheStorePort,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Monthly revenue endpoint.
async fn monthly_revenue<R, C>(
    State(state): State<AppState<R, C>>,
    Json(request): Json<MonthlyRevenueRequest>,
) -> Response
where
    R: ReservationStorePort,
    C: CacheStorePort,
{
    let tenant_id = TenantId::new(&request.tenant_id);
    let property_id = PropertyId::new(&request.property_id);

    match state
        .get_monthly_revenue
        .execute(&tenant_id, &property_id, request.year, request.month)
        .await
    {
        Ok(dto) => (
            StatusCode::OK,
            Json(MonthlyRevenueResponse {
                total_revenue: dto.total_revenue,
                property_id: dto.property_id,
                period: dto.period,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(
                tenant_id = %tenant_id,
                property_id = %property_id,
                error = %e,
                "monthly revenue request failed"
            );
            error_response(&e)
        }
    }
}

/// Cache flush endpoint.
async fn flush_cache<R, C>(
    State(state): State<AppState<R, C>>,
    Json(request): Json<FlushCacheRequest>,
) -> Response
where
    R: ReservationStorePort,
    C: CacheStorePort,
{
    let scope = match resolve_scope(request) {
        Ok(scope) => scope,
        Err(e) => return error_response(&e),
    };

    match state.flush_cache.execute(scope).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(FlushCacheResponse {
                flushed: true,
                keys_removed: outcome.keys_removed,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "cache flush failed");
            error_response(&e)
        }
    }
}

/// Map the flush request shape to a scope.
///
/// Accepted shapes: all entry fields, tenant only, or an empty body.
/// Anything partial is rejected rather than guessed at.
fn resolve_scope(request: FlushCacheRequest) -> Result<FlushScope, RevenueError> {
    match (request.tenant_id, request.property_id, request.year, request.month) {
        (Some(tenant_id), Some(property_id), Some(year), Some(month)) => {
            let period = RevenuePeriod::new(year, month)?;
            Ok(FlushScope::Entry {
                tenant_id: TenantId::new(&tenant_id),
                property_id: PropertyId::new(&property_id),
                period,
            })
        }
        (Some(tenant_id), None, None, None) => Ok(FlushScope::Tenant(TenantId::new(&tenant_id))),
        (None, None, None, None) => Ok(FlushScope::All),
        _ => Err(RevenueError::invalid_request(
            "flush request must name a full entry, a tenant, or nothing",
        )),
    }
}
