pub mod health;
pub mod orders;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// ```text
/// /orders                                          list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(orders::router())
}
