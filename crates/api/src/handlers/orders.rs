//! Handlers for the `/orders` resource.
//!
//! Each handler borrows the pool from state and performs a single
//! repository call; the connection goes back to the pool when it returns.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use stockroom_db::models::product_order::CreateProductOrder;
use stockroom_db::repositories::ProductOrderRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::OrderList;
use crate::state::AppState;

/// GET /orders
///
/// List every order. No pagination.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<OrderList>> {
    let orders = ProductOrderRepo::list(&state.pool).await?;
    Ok(Json(OrderList { orders }))
}

/// POST /orders
///
/// Place a new order and return it with its assigned id.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProductOrder>,
) -> AppResult<impl IntoResponse> {
    let order = ProductOrderRepo::create(&state.pool, &input).await?;
    tracing::info!(id = order.id, product = %order.product, "Order placed");
    Ok((StatusCode::CREATED, Json(order)))
}
