use crate::db::DatabasePool;
use crate::error::{AppError, AppResult};
use crate::models::{
    CreateWarehouseRequest, UpdateWarehouseRequest, Warehouse, WarehouseInventoryItem,
};
use sqlx::Row;

pub struct WarehouseService {
    db: DatabasePool,
}

impl WarehouseService {
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }

    pub async fn list_warehouses(&self) -> AppResult<Vec<Warehouse>> {
        match &self.db {
            DatabasePool::Postgres(pool) => {
                let rows = sqlx::query(
                    r#"
                    SELECT id, warehouse_name, address, city, country, contact_name,
                           contact_position, contact_phone, contact_email, created_at, updated_at
                    FROM warehouses
                    "#,
                )
                .fetch_all(pool)
                .await?;

                Ok(rows
                    .into_iter()
                    .map(|row| self.row_to_warehouse_postgres(row))
                    .collect())
            }
            DatabasePool::Sqlite(pool) => {
                let rows = sqlx::query(
                    r#"
                    SELECT id, warehouse_name, address, city, country, contact_name,
                           contact_position, contact_phone, contact_email, created_at, updated_at
                    FROM warehouses
                    "#,
                )
                .fetch_all(pool)
                .await?;

                Ok(rows
                    .into_iter()
                    .map(|row| self.row_to_warehouse(row))
                    .collect())
            }
        }
    }

    pub async fn get_warehouse(&self, id: i64) -> AppResult<Warehouse> {
        match &self.db {
            DatabasePool::Postgres(pool) => {
                let row = sqlx::query(
                    r#"
                    SELECT id, warehouse_name, address, city, country, contact_name,
                           contact_position, contact_phone, contact_email, created_at, updated_at
                    FROM warehouses
                    WHERE id = $1
                    "#,
                )
                .bind(id)
                .fetch_optional(pool)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Warehouse with ID {} not found", id))
                })?;

                Ok(self.row_to_warehouse_postgres(row))
            }
            DatabasePool::Sqlite(pool) => {
                let row = sqlx::query(
                    r#"
                    SELECT id, warehouse_name, address, city, country, contact_name,
                           contact_position, contact_phone, contact_email, created_at, updated_at
                    FROM warehouses
                    WHERE id = ?1
                    "#,
                )
                .bind(id)
                .fetch_optional(pool)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Warehouse with ID {} not found", id))
                })?;

                Ok(self.row_to_warehouse(row))
            }
        }
    }

    pub async fn create_warehouse(&self, req: CreateWarehouseRequest) -> AppResult<Warehouse> {
        match &self.db {
            DatabasePool::Postgres(pool) => {
                let result = sqlx::query(
                    r#"
                    INSERT INTO warehouses (warehouse_name, address, city, country,
                        contact_name, contact_position, contact_phone, contact_email)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                    RETURNING id
                    "#,
                )
                .bind(&req.warehouse_name)
                .bind(&req.address)
                .bind(&req.city)
                .bind(&req.country)
                .bind(&req.contact_name)
                .bind(&req.contact_position)
                .bind(&req.contact_phone)
                .bind(&req.contact_email)
                .fetch_one(pool)
                .await?;

                let id: i64 = result.get("id");
                self.get_warehouse(id).await
            }
            DatabasePool::Sqlite(pool) => {
                let result = sqlx::query(
                    r#"
                    INSERT INTO warehouses (warehouse_name, address, city, country,
                        contact_name, contact_position, contact_phone, contact_email)
                    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                    "#,
                )
                .bind(&req.warehouse_name)
                .bind(&req.address)
                .bind(&req.city)
                .bind(&req.country)
                .bind(&req.contact_name)
                .bind(&req.contact_position)
                .bind(&req.contact_phone)
                .bind(&req.contact_email)
                .execute(pool)
                .await?;

                let id = result.last_insert_rowid();
                self.get_warehouse(id).await
            }
        }
    }

    pub async fn update_warehouse(
        &self,
        id: i64,
        req: UpdateWarehouseRequest,
    ) -> AppResult<Warehouse> {
        // updated_at is always computed here; any caller-supplied value was
        // already discarded by the payload shape.
        let now = chrono::Utc::now();

        match &self.db {
            DatabasePool::Postgres(pool) => {
                let result = sqlx::query(
                    r#"
                    UPDATE warehouses SET
                        warehouse_name = $2,
                        address = $3,
                        city = $4,
                        country = $5,
                        contact_name = $6,
                        contact_position = $7,
                        contact_phone = $8,
                        contact_email = $9,
                        updated_at = $10
                    WHERE id = $1
                    "#,
                )
                .bind(id)
                .bind(&req.warehouse_name)
                .bind(&req.address)
                .bind(&req.city)
                .bind(&req.country)
                .bind(&req.contact_name)
                .bind(&req.contact_position)
                .bind(&req.contact_phone)
                .bind(&req.contact_email)
                .bind(now)
                .execute(pool)
                .await?;

                if result.rows_affected() == 0 {
                    return Err(AppError::NotFound(format!(
                        "Warehouse with ID {} not found",
                        id
                    )));
                }

                self.get_warehouse(id).await
            }
            DatabasePool::Sqlite(pool) => {
                let result = sqlx::query(
                    r#"
                    UPDATE warehouses SET
                        warehouse_name = ?2,
                        address = ?3,
                        city = ?4,
                        country = ?5,
                        contact_name = ?6,
                        contact_position = ?7,
                        contact_phone = ?8,
                        contact_email = ?9,
                        updated_at = ?10
                    WHERE id = ?1
                    "#,
                )
                .bind(id)
                .bind(&req.warehouse_name)
                .bind(&req.address)
                .bind(&req.city)
                .bind(&req.country)
                .bind(&req.contact_name)
                .bind(&req.contact_position)
                .bind(&req.contact_phone)
                .bind(&req.contact_email)
                .bind(now)
                .execute(pool)
                .await?;

                if result.rows_affected() == 0 {
                    return Err(AppError::NotFound(format!(
                        "Warehouse with ID {} not found",
                        id
                    )));
                }

                self.get_warehouse(id).await
            }
        }
    }

    pub async fn delete_warehouse(&self, id: i64) -> AppResult<()> {
        match &self.db {
            DatabasePool::Postgres(pool) => {
                let result = sqlx::query("DELETE FROM warehouses WHERE id = $1")
                    .bind(id)
                    .execute(pool)
                    .await?;

                if result.rows_affected() == 0 {
                    return Err(AppError::NotFound(format!(
                        "Warehouse with ID {} not found",
                        id
                    )));
                }

                Ok(())
            }
            DatabasePool::Sqlite(pool) => {
                let result = sqlx::query("DELETE FROM warehouses WHERE id = ?1")
                    .bind(id)
                    .execute(pool)
                    .await?;

                if result.rows_affected() == 0 {
                    return Err(AppError::NotFound(format!(
                        "Warehouse with ID {} not found",
                        id
                    )));
                }

                Ok(())
            }
        }
    }

    /// Items held by one warehouse. An empty result is reported as not found;
    /// callers cannot distinguish an unknown warehouse from an empty one.
    pub async fn inventory_for_warehouse(
        &self,
        id: i64,
    ) -> AppResult<Vec<WarehouseInventoryItem>> {
        let items = match &self.db {
            DatabasePool::Postgres(pool) => {
                let rows = sqlx::query(
                    r#"
                    SELECT id, item_name, category, status, quantity, created_at, updated_at
                    FROM inventories
                    WHERE warehouse_id = $1
                    "#,
                )
                .bind(id)
                .fetch_all(pool)
                .await?;

                rows.into_iter()
                    .map(|row| self.row_to_inventory_item_postgres(row))
                    .collect::<Vec<_>>()
            }
            DatabasePool::Sqlite(pool) => {
                let rows = sqlx::query(
                    r#"
                    SELECT id, item_name, category, status, quantity, created_at, updated_at
                    FROM inventories
                    WHERE warehouse_id = ?1
                    "#,
                )
                .bind(id)
                .fetch_all(pool)
                .await?;

                rows.into_iter()
                    .map(|row| self.row_to_inventory_item(row))
                    .collect::<Vec<_>>()
            }
        };

        if items.is_empty() {
            return Err(AppError::NotFound(format!(
                "No inventory found for warehouse ID {}",
                id
            )));
        }

        Ok(items)
    }

    fn row_to_warehouse(&self, row: sqlx::sqlite::SqliteRow) -> Warehouse {
        Warehouse {
            id: row.get("id"),
            warehouse_name: row.get("warehouse_name"),
            address: row.get("address"),
            city: row.get("city"),
            country: row.get("country"),
            contact_name: row.get("contact_name"),
            contact_position: row.get("contact_position"),
            contact_phone: row.get("contact_phone"),
            contact_email: row.get("contact_email"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }

    fn row_to_warehouse_postgres(&self, row: sqlx::postgres::PgRow) -> Warehouse {
        Warehouse {
            id: row.get("id"),
            warehouse_name: row.get("warehouse_name"),
            address: row.get("address"),
            city: row.get("city"),
            country: row.get("country"),
            contact_name: row.get("contact_name"),
            contact_position: row.get("contact_position"),
            contact_phone: row.get("contact_phone"),
            contact_email: row.get("contact_email"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }

    fn row_to_inventory_item(&self, row: sqlx::sqlite::SqliteRow) -> WarehouseInventoryItem {
        WarehouseInventoryItem {
            id: row.get("id"),
            item_name: row.get("item_name"),
            category: row.get("category"),
            status: row.get("status"),
            quantity: row.get("quantity"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }

    fn row_to_inventory_item_postgres(&self, row: sqlx::postgres::PgRow) -> WarehouseInventoryItem {
        WarehouseInventoryItem {
            id: row.get("id"),
            item_name: row.get("item_name"),
            category: row.get("category"),
            status: row.get("status"),
            quantity: row.get("quantity"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }
}
