//! One-time fixture seed for an empty `products` table.

use stockroom_core::fixtures::FIXTURE_ORDERS;

use crate::repositories::ProductOrderRepo;
use crate::DbPool;

/// Insert [`FIXTURE_ORDERS`] if the table holds no rows.
///
/// The emptiness check and the inserts share one transaction, so a single
/// database never receives two fixture sets. Separate processes starting
/// against the same fresh file can still race; SQLite rejects one of them
/// with a busy error.
///
/// Returns the number of rows inserted (zero when the table was non-empty).
pub async fn seed_fixtures(pool: &DbPool) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let existing = ProductOrderRepo::count(&mut *tx).await?;
    if existing > 0 {
        tracing::debug!(existing, "Orders table not empty, skipping fixture seed");
        return Ok(0);
    }

    for fixture in FIXTURE_ORDERS {
        ProductOrderRepo::insert(&mut *tx, fixture.product, fixture.qty_stk).await?;
    }
    tx.commit().await?;

    let inserted = FIXTURE_ORDERS.len() as u64;
    tracing::info!(inserted, "Seeded fixture orders");
    Ok(inserted)
}
