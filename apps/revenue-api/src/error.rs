//! Rich error handling for the revenue service.
//!
//! This module provides the service-level error taxonomy with HTTP status
//! mapping. Errors include context pairs for debugging and client-side
//! handling.
//!
//! # HTTP Status Codes
//!
//! | Status | Usage |
//! |--------|-------|
//! | `400 Bad Request` | Malformed request parameters |
//! | `404 Not Found` | Tenant/property reported missing by the store |
//! | `422 Unprocessable Entity` | Data-integrity failure (malformed stored amount) |
//! | `503 Service Unavailable` | Reservation store outage (retryable) |
//! | `500 Internal Server Error` | Unexpected server error |

use std::collections::HashMap;

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::ports::ReservationStoreError;
use crate::domain::shared::DomainError;

/// Error codes for the revenue service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation errors (400)
    /// Invalid request format or missing fields.
    InvalidRequest,
    /// Year/month outside the supported calendar range.
    InvalidPeriod,

    // Data-integrity errors (422)
    /// A stored amount could not be parsed as an exact decimal.
    InvalidAmount,

    // Not found errors (404)
    /// Tenant not found (only when a store reports it; adapters in this
    /// repo use the empty-result policy instead).
    TenantNotFound,
    /// Property not found under the tenant.
    PropertyNotFound,

    // Upstream outages (503)
    /// Reservation store unreachable; retryable, never coerced to zero.
    StorageUnavailable,
    /// Cache store unreachable during an explicit flush. Read-path cache
    /// failures never surface with this code; they fall back silently.
    CacheUnavailable,

    // Internal errors (500)
    /// Unexpected server error.
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error.
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest | Self::InvalidPeriod => StatusCode::BAD_REQUEST,
            Self::InvalidAmount => StatusCode::UNPROCESSABLE_ENTITY,
            Self::TenantNotFound | Self::PropertyNotFound => StatusCode::NOT_FOUND,
            Self::StorageUnavailable | Self::CacheUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::InvalidPeriod => "INVALID_PERIOD",
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::TenantNotFound => "TENANT_NOT_FOUND",
            Self::PropertyNotFound => "PROPERTY_NOT_FOUND",
            Self::StorageUnavailable => "STORAGE_UNAVAILABLE",
            Self::CacheUnavailable => "CACHE_UNAVAILABLE",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// A rich error with context for the revenue service.
#[derive(Debug, Error)]
pub struct RevenueError {
    /// Error code.
    code: ErrorCode,
    /// Human-readable message.
    message: String,
    /// Additional context (key-value pairs).
    context: Vec<(String, String)>,
}

impl RevenueError {
    /// Create a new revenue error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: Vec::new(),
        }
    }

    /// Add context to the error.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the context.
    #[must_use]
    pub fn context(&self) -> &[(String, String)] {
        &self.context
    }

    /// Convert to an HTTP error response body.
    #[must_use]
    pub fn to_http_response(&self) -> HttpErrorResponse {
        HttpErrorResponse {
            code: self.code.reason().to_string(),
            message: self.message.clone(),
            details: self.context.iter().cloned().collect(),
        }
    }
}

impl std::fmt::Display for RevenueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.reason(), self.message)
    }
}

/// HTTP error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpErrorResponse {
    /// Error code string.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Additional details.
    pub details: HashMap<String, String>,
}

/// Convenience constructors for common errors.
impl RevenueError {
    /// Invalid request format.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Reservation store outage.
    #[must_use]
    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageUnavailable, message)
    }

    /// Cache store outage during an explicit flush.
    #[must_use]
    pub fn cache_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::CacheUnavailable, message)
    }

    /// Internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<DomainError> for RevenueError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::InvalidAmount { input, .. } => {
                Self::new(ErrorCode::InvalidAmount, err.to_string())
                    .with_context("input", input.clone())
            }
            DomainError::InvalidPeriod { year, month, .. } => {
                Self::new(ErrorCode::InvalidPeriod, err.to_string())
                    .with_context("year", year.to_string())
                    .with_context("month", month.to_string())
            }
            DomainError::InvalidValue { field, .. } => {
                Self::new(ErrorCode::InvalidRequest, err.to_string())
                    .with_context("field", field.clone())
            }
        }
    }
}

impl From<ReservationStoreError> for RevenueError {
    fn from(err: ReservationStoreError) -> Self {
        match &err {
            ReservationStoreError::Unavailable { .. } => {
                Self::new(ErrorCode::StorageUnavailable, err.to_string())
            }
            ReservationStoreError::TenantNotFound { tenant_id } => {
                Self::new(ErrorCode::TenantNotFound, err.to_string())
                    .with_context("tenant_id", tenant_id.clone())
            }
            ReservationStoreError::PropertyNotFound { property_id } => {
                Self::new(ErrorCode::PropertyNotFound, err.to_string())
                    .with_context("property_id", property_id.clone())
            }
        }
    }
}
