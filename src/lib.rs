//! rtrade — risk and performance metrics for discretionary trade journals.
//!
//! Hexagonal architecture: pure metrics and journal types in [`domain`], port
//! traits in [`ports`], file and report implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
