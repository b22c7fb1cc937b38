//! Domain layer - Core business logic with no external dependencies.

pub mod revenue;
pub mod shared;
