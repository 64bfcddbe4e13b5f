//! Core domain types and the trade metrics.

pub mod error;
pub mod metrics;
pub mod sizing;
pub mod summary;
pub mod trade;
