//! Port traits implemented by [`crate::adapters`].

pub mod config_port;
pub mod report_port;
pub mod trade_port;
