//! Response bodies that wrap repository rows.

use serde::Serialize;
use stockroom_db::models::product_order::ProductOrder;

/// Body of `GET /orders`: every stored order, ascending by id.
#[derive(Debug, Serialize)]
pub struct OrderList {
    pub orders: Vec<ProductOrder>,
}
