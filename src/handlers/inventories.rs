use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::models::{CreateInventoryRequest, InventoryItem, UpdateInventoryRequest};
use crate::AppState;

pub async fn list_inventories(
    State((_warehouse_service, inventory_service)): State<AppState>,
) -> Result<Json<Vec<InventoryItem>>, (StatusCode, String)> {
    match inventory_service.list_inventories().await {
        Ok(inventories) => Ok(Json(inventories)),
        Err(e) => {
            tracing::error!("Failed to list inventories: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error retrieving inventories: {}", e),
            ))
        }
    }
}

pub async fn get_inventory(
    State((_warehouse_service, inventory_service)): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<InventoryItem>> {
    let inventory = inventory_service.get_inventory(id).await?;
    Ok(Json(inventory))
}

pub async fn create_inventory(
    State((_warehouse_service, inventory_service)): State<AppState>,
    Json(req): Json<CreateInventoryRequest>,
) -> AppResult<(StatusCode, Json<InventoryItem>)> {
    req.validate()?;

    let inventory = inventory_service.create_inventory(req).await?;
    Ok((StatusCode::CREATED, Json(inventory)))
}

pub async fn update_inventory(
    State((_warehouse_service, inventory_service)): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateInventoryRequest>,
) -> AppResult<Json<InventoryItem>> {
    req.validate()?;

    let inventory = inventory_service.update_inventory(id, req).await?;
    Ok(Json(inventory))
}

pub async fn delete_inventory(
    State((_warehouse_service, inventory_service)): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    inventory_service.delete_inventory(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_categories(
    State((_warehouse_service, inventory_service)): State<AppState>,
) -> AppResult<Json<Vec<String>>> {
    let categories = inventory_service.list_categories().await?;
    Ok(Json(categories))
}
