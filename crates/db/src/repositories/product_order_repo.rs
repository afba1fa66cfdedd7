//! Repository for the `products` table.

use sqlx::{Executor, Sqlite, SqlitePool};
use stockroom_core::types::Quantity;

use crate::models::product_order::{CreateProductOrder, ProductOrder};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, product, qty_stk";

/// Provides list, count and insert operations for product orders.
pub struct ProductOrderRepo;

impl ProductOrderRepo {
    /// List all orders ordered by ID ascending.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<ProductOrder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id ASC");
        sqlx::query_as::<_, ProductOrder>(&query)
            .fetch_all(pool)
            .await
    }

    /// Count all orders.
    pub async fn count<'e, E>(executor: E) -> Result<i64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(executor)
            .await
    }

    /// Place a new order in its own transaction and return the stored row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateProductOrder,
    ) -> Result<ProductOrder, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let order = Self::insert(&mut *tx, &input.product, input.qty_stk).await?;
        tx.commit().await?;
        Ok(order)
    }

    /// Insert one row on the given executor without committing.
    ///
    /// Used by [`create`](Self::create) and by the fixture seed, which
    /// batches its inserts into a single transaction.
    pub async fn insert<'e, E>(
        executor: E,
        product: &str,
        qty_stk: Quantity,
    ) -> Result<ProductOrder, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!(
            "INSERT INTO products (product, qty_stk) VALUES (?1, ?2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductOrder>(&query)
            .bind(product)
            .bind(qty_stk)
            .fetch_one(executor)
            .await
    }
}
