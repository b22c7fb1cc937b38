//! Application layer - Use cases and port definitions.

pub mod dto;
pub mod ports;
pub mod use_cases;
