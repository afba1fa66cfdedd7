//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept a pool (or, for composable writes, any SQLite executor) as the
//! first argument.

pub mod product_order_repo;

pub use product_order_repo::ProductOrderRepo;
