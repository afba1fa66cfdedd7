//! Route definitions for orders.

use axum::routing::get;
use axum::Router;

use crate::handlers::orders;
use crate::state::AppState;

/// Routes mounted at `/orders`.
///
/// ```text
/// GET  /orders  -> list
/// POST /orders  -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/orders", get(orders::list).post(orders::create))
}
