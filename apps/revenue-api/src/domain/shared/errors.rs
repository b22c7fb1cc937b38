//! Domain errors for the revenue service.

use thiserror::Error;

/// Domain-level errors that can occur in business logic.
///
/// These errors are independent of infrastructure concerns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A currency amount could not be parsed as a finite base-10 decimal.
    #[error("invalid amount '{input}': {message}")]
    InvalidAmount {
        /// The rejected input.
        input: String,
        /// Parse failure detail.
        message: String,
    },

    /// Invalid value for a field.
    #[error("invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },

    /// A revenue period outside the supported calendar range.
    #[error("invalid period {year}-{month}: {message}")]
    InvalidPeriod {
        /// Requested year.
        year: i32,
        /// Requested month.
        month: u32,
        /// Validation failure detail.
        message: String,
    },
}
