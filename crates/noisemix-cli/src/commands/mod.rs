//! Command implementations.

pub mod synthesize;
pub mod upload;
