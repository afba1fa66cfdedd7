/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once in `main` and cloned per request; the pool is itself a cheap
/// handle, so each request checks out its own connection.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: stockroom_db::DbPool,
}
