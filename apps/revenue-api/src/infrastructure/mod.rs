//! Infrastructure Layer
//!
//! Adapters that connect the application core to the outside world.

pub mod cache;
pub mod http;
pub mod persistence;
