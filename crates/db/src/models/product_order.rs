//! Product order entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stockroom_core::types::{DbId, Quantity};

/// A row from the `products` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ProductOrder {
    pub id: DbId,
    pub product: String,
    pub qty_stk: Quantity,
}

/// DTO for placing a new order. Both fields are required; the id is assigned on insert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductOrder {
    pub product: String,
    pub qty_stk: Quantity,
}
