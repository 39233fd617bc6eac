//! Clinic inventory persistence

use crate::error::AppError;
use crate::models::{InventoryItem, InventoryItemPayload};
use deadpool_postgres::Pool;
use tokio_postgres::Row;

fn map_item(row: &Row) -> InventoryItem {
    InventoryItem {
        id: row.get("id"),
        item_name: row.get("item_name"),
        category: row.get("category"),
        brand: row.get("brand"),
        quantity: row.get("quantity"),
        unit: row.get("unit"),
        price: row.get("price"),
    }
}

/// Inventory service for database operations
pub struct InventoryService {
    pool: Pool,
}

impl InventoryService {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// All inventory items, newest first
    pub async fn list(&self) -> Result<Vec<InventoryItem>, AppError> {
        let client = self.pool.get().await?;

        let rows = client
            .query(
                "SELECT id, item_name, category, brand, quantity, unit, price \
                 FROM inventory ORDER BY id DESC",
                &[],
            )
            .await?;

        Ok(rows.iter().map(map_item).collect())
    }

    pub async fn create(&self, payload: &InventoryItemPayload) -> Result<InventoryItem, AppError> {
        let client = self.pool.get().await?;

        let row = client
            .query_one(
                "INSERT INTO inventory (item_name, category, brand, quantity, unit, price) \
                 VALUES ($1, $2, $3, $4, $5, $6) \
                 RETURNING id, item_name, category, brand, quantity, unit, price",
                &[
                    &payload.item_name,
                    &payload.category,
                    &payload.brand,
                    &payload.quantity,
                    &payload.unit,
                    &payload.price,
                ],
            )
            .await?;

        Ok(map_item(&row))
    }

    pub async fn update(&self, id: i32, payload: &InventoryItemPayload) -> Result<u64, AppError> {
        let client = self.pool.get().await?;

        let affected = client
            .execute(
                "UPDATE inventory SET item_name = $1, category = $2, brand = $3, \
                 quantity = $4, unit = $5, price = $6 WHERE id = $7",
                &[
                    &payload.item_name,
                    &payload.category,
                    &payload.brand,
                    &payload.quantity,
                    &payload.unit,
                    &payload.price,
                    &id,
                ],
            )
            .await?;

        Ok(affected)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let client = self.pool.get().await?;

        let affected = client
            .execute("DELETE FROM inventory WHERE id = $1", &[&id])
            .await?;

        Ok(affected)
    }
}
