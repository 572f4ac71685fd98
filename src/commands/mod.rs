//! Command implementations for the CLI
//!
//! This module contains the implementation of all CLI commands:
//! - dashboard: Interactive calculator dashboard
//! - one_way: One-shot one-way trip cost report
//! - fleet: One-shot dedicated fleet report
//! - config: Configuration display and validation

pub mod config;
pub mod dashboard;
pub mod fleet;
pub mod one_way;
