use std::str::FromStr;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

use stockroom_server::db::DatabasePool;
use stockroom_server::services::{InventoryService, WarehouseService};

/// Test harness: the real router over an in-memory SQLite store.
pub struct TestApp {
    pub router: Router,
    pub db: DatabasePool,
}

impl TestApp {
    pub async fn new() -> Self {
        let options =
            SqliteConnectOptions::from_str("sqlite::memory:").expect("sqlite options");
        // A single connection keeps every statement on the same in-memory db.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .expect("failed to open in-memory sqlite");

        let db = DatabasePool::Sqlite(pool);
        db.migrate().await.expect("failed to run migrations");

        let warehouse_service = Arc::new(WarehouseService::new(db.clone()));
        let inventory_service = Arc::new(InventoryService::new(db.clone()));
        let router = stockroom_server::app((warehouse_service, inventory_service));

        TestApp { router, db }
    }

    pub async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .expect("request"),
            None => builder.body(Body::empty()).expect("request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router call failed");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        (status, bytes.to_vec())
    }

    pub async fn send_json(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let (status, bytes) = self.send(method, path, body).await;
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    /// Runs a raw statement against the store, for seeding rows the API
    /// would refuse.
    #[allow(dead_code)]
    pub async fn execute(&self, sql: &str) {
        match &self.db {
            DatabasePool::Sqlite(pool) => {
                sqlx::query(sql)
                    .execute(pool)
                    .await
                    .expect("seed statement failed");
            }
            DatabasePool::Postgres(_) => panic!("test harness is sqlite-only"),
        }
    }
}
