use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::models::{
    CreateWarehouseRequest, UpdateWarehouseRequest, Warehouse, WarehouseInventoryItem,
};
use crate::AppState;

// The bare list endpoint answers failures with a plain-text body, unlike the
// rest of the surface which wraps messages in JSON.
pub async fn list_warehouses(
    State((warehouse_service, _inventory_service)): State<AppState>,
) -> Result<Json<Vec<Warehouse>>, (StatusCode, String)> {
    match warehouse_service.list_warehouses().await {
        Ok(warehouses) => Ok(Json(warehouses)),
        Err(e) => {
            tracing::error!("Failed to list warehouses: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error retrieving warehouses: {}", e),
            ))
        }
    }
}

pub async fn get_warehouse(
    State((warehouse_service, _inventory_service)): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Warehouse>> {
    let warehouse = warehouse_service.get_warehouse(id).await?;
    Ok(Json(warehouse))
}

pub async fn create_warehouse(
    State((warehouse_service, _inventory_service)): State<AppState>,
    Json(req): Json<CreateWarehouseRequest>,
) -> AppResult<(StatusCode, Json<Warehouse>)> {
    req.validate()?;

    let warehouse = warehouse_service.create_warehouse(req).await?;
    Ok((StatusCode::CREATED, Json(warehouse)))
}

pub async fn update_warehouse(
    State((warehouse_service, _inventory_service)): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateWarehouseRequest>,
) -> AppResult<Json<Warehouse>> {
    req.validate()?;

    let warehouse = warehouse_service.update_warehouse(id, req).await?;
    Ok(Json(warehouse))
}

pub async fn delete_warehouse(
    State((warehouse_service, _inventory_service)): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    warehouse_service.delete_warehouse(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_warehouse_inventory(
    State((warehouse_service, _inventory_service)): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<WarehouseInventoryItem>>> {
    let items = warehouse_service.inventory_for_warehouse(id).await?;
    Ok(Json(items))
}
