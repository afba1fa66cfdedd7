//! Row structs and input DTOs, one module per table.

pub mod product_order;
