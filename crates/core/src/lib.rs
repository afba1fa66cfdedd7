//! Shared domain types for the stockroom order service.

pub mod fixtures;
pub mod types;
