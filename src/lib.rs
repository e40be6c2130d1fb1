use axum::{routing::get, Router};
use std::sync::Arc;

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use crate::services::{InventoryService, WarehouseService};

pub type AppState = (Arc<WarehouseService>, Arc<InventoryService>);

/// Builds the application router. Layers that depend on configuration
/// (CORS, request tracing) are applied by the caller.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        // Warehouse routes
        .route(
            "/warehouses",
            get(handlers::list_warehouses).post(handlers::create_warehouse),
        )
        .route(
            "/warehouses/:id",
            get(handlers::get_warehouse)
                .put(handlers::update_warehouse)
                .delete(handlers::delete_warehouse),
        )
        .route(
            "/warehouses/:id/inventory",
            get(handlers::list_warehouse_inventory),
        )
        // Inventory routes
        .route(
            "/inventories",
            get(handlers::list_inventories).post(handlers::create_inventory),
        )
        .route("/inventories/categories", get(handlers::list_categories))
        .route(
            "/inventories/:id",
            get(handlers::get_inventory)
                .put(handlers::update_inventory)
                .delete(handlers::delete_inventory),
        )
        .with_state(state)
}

async fn root() -> &'static str {
    "Stockroom Server"
}

async fn health_check() -> &'static str {
    "OK"
}
