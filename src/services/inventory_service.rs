use crate::db::DatabasePool;
use crate::error::{AppError, AppResult};
use crate::models::{CreateInventoryRequest, InventoryItem, UpdateInventoryRequest};
use sqlx::Row;

pub struct InventoryService {
    db: DatabasePool,
}

impl InventoryService {
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }

    pub async fn list_inventories(&self) -> AppResult<Vec<InventoryItem>> {
        match &self.db {
            DatabasePool::Postgres(pool) => {
                let rows = sqlx::query(
                    r#"
                    SELECT i.id, i.warehouse_id, w.warehouse_name, i.item_name, i.description,
                           i.category, i.status, i.quantity, i.created_at, i.updated_at
                    FROM inventories i
                    JOIN warehouses w ON i.warehouse_id = w.id
                    "#,
                )
                .fetch_all(pool)
                .await?;

                Ok(rows
                    .into_iter()
                    .map(|row| self.row_to_inventory_postgres(row))
                    .collect())
            }
            DatabasePool::Sqlite(pool) => {
                let rows = sqlx::query(
                    r#"
                    SELECT i.id, i.warehouse_id, w.warehouse_name, i.item_name, i.description,
                           i.category, i.status, i.quantity, i.created_at, i.updated_at
                    FROM inventories i
                    JOIN warehouses w ON i.warehouse_id = w.id
                    "#,
                )
                .fetch_all(pool)
                .await?;

                Ok(rows
                    .into_iter()
                    .map(|row| self.row_to_inventory(row))
                    .collect())
            }
        }
    }

    pub async fn get_inventory(&self, id: i64) -> AppResult<InventoryItem> {
        match &self.db {
            DatabasePool::Postgres(pool) => {
                let row = sqlx::query(
                    r#"
                    SELECT i.id, i.warehouse_id, w.warehouse_name, i.item_name, i.description,
                           i.category, i.status, i.quantity, i.created_at, i.updated_at
                    FROM inventories i
                    JOIN warehouses w ON i.warehouse_id = w.id
                    WHERE i.id = $1
                    "#,
                )
                .bind(id)
                .fetch_optional(pool)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Inventory with ID {} not found", id))
                })?;

                Ok(self.row_to_inventory_postgres(row))
            }
            DatabasePool::Sqlite(pool) => {
                let row = sqlx::query(
                    r#"
                    SELECT i.id, i.warehouse_id, w.warehouse_name, i.item_name, i.description,
                           i.category, i.status, i.quantity, i.created_at, i.updated_at
                    FROM inventories i
                    JOIN warehouses w ON i.warehouse_id = w.id
                    WHERE i.id = ?1
                    "#,
                )
                .bind(id)
                .fetch_optional(pool)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Inventory with ID {} not found", id))
                })?;

                Ok(self.row_to_inventory(row))
            }
        }
    }

    pub async fn create_inventory(&self, req: CreateInventoryRequest) -> AppResult<InventoryItem> {
        match &self.db {
            DatabasePool::Postgres(pool) => {
                let result = sqlx::query(
                    r#"
                    INSERT INTO inventories (item_name, description, category, status,
                        quantity, warehouse_id)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    RETURNING id
                    "#,
                )
                .bind(&req.item_name)
                .bind(&req.description)
                .bind(&req.category)
                .bind(&req.status)
                .bind(req.quantity)
                .bind(req.warehouse_id)
                .fetch_one(pool)
                .await?;

                let id: i64 = result.get("id");
                self.get_inventory(id).await
            }
            DatabasePool::Sqlite(pool) => {
                let result = sqlx::query(
                    r#"
                    INSERT INTO inventories (item_name, description, category, status,
                        quantity, warehouse_id)
                    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                    "#,
                )
                .bind(&req.item_name)
                .bind(&req.description)
                .bind(&req.category)
                .bind(&req.status)
                .bind(req.quantity)
                .bind(req.warehouse_id)
                .execute(pool)
                .await?;

                let id = result.last_insert_rowid();
                self.get_inventory(id).await
            }
        }
    }

    pub async fn update_inventory(
        &self,
        id: i64,
        req: UpdateInventoryRequest,
    ) -> AppResult<InventoryItem> {
        let now = chrono::Utc::now();

        match &self.db {
            DatabasePool::Postgres(pool) => {
                let result = sqlx::query(
                    r#"
                    UPDATE inventories SET
                        item_name = $2,
                        description = $3,
                        category = $4,
                        status = $5,
                        quantity = $6,
                        warehouse_id = $7,
                        updated_at = $8
                    WHERE id = $1
                    "#,
                )
                .bind(id)
                .bind(&req.item_name)
                .bind(&req.description)
                .bind(&req.category)
                .bind(&req.status)
                .bind(req.quantity)
                .bind(req.warehouse_id)
                .bind(now)
                .execute(pool)
                .await?;

                if result.rows_affected() == 0 {
                    return Err(AppError::NotFound(format!(
                        "Inventory with ID {} not found",
                        id
                    )));
                }

                self.get_inventory(id).await
            }
            DatabasePool::Sqlite(pool) => {
                let result = sqlx::query(
                    r#"
                    UPDATE inventories SET
                        item_name = ?2,
                        description = ?3,
                        category = ?4,
                        status = ?5,
                        quantity = ?6,
                        warehouse_id = ?7,
                        updated_at = ?8
                    WHERE id = ?1
                    "#,
                )
                .bind(id)
                .bind(&req.item_name)
                .bind(&req.description)
                .bind(&req.category)
                .bind(&req.status)
                .bind(req.quantity)
                .bind(req.warehouse_id)
                .bind(now)
                .execute(pool)
                .await?;

                if result.rows_affected() == 0 {
                    return Err(AppError::NotFound(format!(
                        "Inventory with ID {} not found",
                        id
                    )));
                }

                self.get_inventory(id).await
            }
        }
    }

    pub async fn delete_inventory(&self, id: i64) -> AppResult<()> {
        match &self.db {
            DatabasePool::Postgres(pool) => {
                let result = sqlx::query("DELETE FROM inventories WHERE id = $1")
                    .bind(id)
                    .execute(pool)
                    .await?;

                if result.rows_affected() == 0 {
                    return Err(AppError::NotFound(format!(
                        "Inventory with ID {} not found",
                        id
                    )));
                }

                Ok(())
            }
            DatabasePool::Sqlite(pool) => {
                let result = sqlx::query("DELETE FROM inventories WHERE id = ?1")
                    .bind(id)
                    .execute(pool)
                    .await?;

                if result.rows_affected() == 0 {
                    return Err(AppError::NotFound(format!(
                        "Inventory with ID {} not found",
                        id
                    )));
                }

                Ok(())
            }
        }
    }

    /// Distinct non-null category values across all inventory rows.
    pub async fn list_categories(&self) -> AppResult<Vec<String>> {
        match &self.db {
            DatabasePool::Postgres(pool) => {
                let rows = sqlx::query(
                    r#"
                    SELECT DISTINCT category
                    FROM inventories
                    WHERE category IS NOT NULL
                    "#,
                )
                .fetch_all(pool)
                .await?;

                Ok(rows.into_iter().map(|row| row.get("category")).collect())
            }
            DatabasePool::Sqlite(pool) => {
                let rows = sqlx::query(
                    r#"
                    SELECT DISTINCT category
                    FROM inventories
                    WHERE category IS NOT NULL
                    "#,
                )
                .fetch_all(pool)
                .await?;

                Ok(rows.into_iter().map(|row| row.get("category")).collect())
            }
        }
    }

    fn row_to_inventory(&self, row: sqlx::sqlite::SqliteRow) -> InventoryItem {
        InventoryItem {
            id: row.get("id"),
            warehouse_id: row.get("warehouse_id"),
            warehouse_name: row.get("warehouse_name"),
            item_name: row.get("item_name"),
            description: row.get("description"),
            category: row.get("category"),
            status: row.get("status"),
            quantity: row.get("quantity"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }

    fn row_to_inventory_postgres(&self, row: sqlx::postgres::PgRow) -> InventoryItem {
        InventoryItem {
            id: row.get("id"),
            warehouse_id: row.get("warehouse_id"),
            warehouse_name: row.get("warehouse_name"),
            item_name: row.get("item_name"),
            description: row.get("description"),
            category: row.get("category"),
            status: row.get("status"),
            quantity: row.get("quantity"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }
}
