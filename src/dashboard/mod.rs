//! Interactive calculator dashboard
//!
//! This module provides the terminal dashboard for the two trip economics
//! calculators: editable parameter fields on the left, the derived metric set
//! on the right, recomputed in full on every edit.

pub mod app;

// Re-export commonly used types
pub use app::{CalculatorApp, View};
