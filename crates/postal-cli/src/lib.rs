//! CLI library components for postal code validation.

pub mod config;
pub mod logging;
pub mod table;
