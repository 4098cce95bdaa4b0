//! CLI command implementations.

pub mod analyze;
pub mod check;
pub mod show;
