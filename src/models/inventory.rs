use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::warehouse::is_missing;

/// Inventory row enriched with the owning warehouse's name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub warehouse_id: i64,
    pub warehouse_name: String,
    pub item_name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: String,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Projection returned by `GET /warehouses/:id/inventory`; the owning
/// warehouse is implied by the path, so `warehouse_id` is not repeated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseInventoryItem {
    pub id: i64,
    pub item_name: String,
    pub category: Option<String>,
    pub status: String,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateInventoryRequest {
    pub item_name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub quantity: Option<i64>,
    pub warehouse_id: Option<i64>,
}

impl CreateInventoryRequest {
    pub fn validate(&self) -> AppResult<()> {
        validate_item_fields(
            &self.item_name,
            &self.description,
            &self.category,
            &self.status,
            self.quantity,
            self.warehouse_id,
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInventoryRequest {
    pub item_name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub quantity: Option<i64>,
    pub warehouse_id: Option<i64>,
}

impl UpdateInventoryRequest {
    pub fn validate(&self) -> AppResult<()> {
        validate_item_fields(
            &self.item_name,
            &self.description,
            &self.category,
            &self.status,
            self.quantity,
            self.warehouse_id,
        )
    }
}

// Create and update share the full-record field contract.
fn validate_item_fields(
    item_name: &Option<String>,
    description: &Option<String>,
    category: &Option<String>,
    status: &Option<String>,
    quantity: Option<i64>,
    warehouse_id: Option<i64>,
) -> AppResult<()> {
    if is_missing(item_name)
        || is_missing(description)
        || is_missing(category)
        || is_missing(status)
        || quantity.is_none()
        || warehouse_id.is_none()
    {
        return Err(AppError::BadRequest(
            "Required fields are missing".to_string(),
        ));
    }

    let status = status.as_deref().unwrap_or_default();
    if status != "In Stock" && status != "Out of Stock" {
        return Err(AppError::BadRequest(
            "Status must be either 'In Stock' or 'Out of Stock'".to_string(),
        ));
    }

    let quantity = quantity.unwrap_or_default();
    if quantity < 0 {
        return Err(AppError::BadRequest(
            "Quantity must be a non-negative integer".to_string(),
        ));
    }
    if status == "Out of Stock" && quantity != 0 {
        return Err(AppError::BadRequest(
            "Quantity must be 0 when status is 'Out of Stock'".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_create() -> CreateInventoryRequest {
        CreateInventoryRequest {
            item_name: Some("Hammer".to_string()),
            description: Some("Claw hammer".to_string()),
            category: Some("Tools".to_string()),
            status: Some("In Stock".to_string()),
            quantity: Some(10),
            warehouse_id: Some(1),
        }
    }

    #[test]
    fn accepts_complete_in_stock_item() {
        assert!(full_create().validate().is_ok());
    }

    #[test]
    fn quantity_zero_is_defined() {
        let mut req = full_create();
        req.quantity = Some(0);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn missing_description_is_rejected() {
        let mut req = full_create();
        req.description = None;
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("Required fields are missing"));
    }

    #[test]
    fn unknown_status_is_rejected() {
        let mut req = full_create();
        req.status = Some("Backordered".to_string());
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("Status must be either"));
    }

    #[test]
    fn out_of_stock_requires_zero_quantity() {
        let mut req = full_create();
        req.status = Some("Out of Stock".to_string());
        req.quantity = Some(3);
        let err = req.validate().unwrap_err();
        assert!(err
            .to_string()
            .contains("Quantity must be 0 when status is 'Out of Stock'"));

        req.quantity = Some(0);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let mut req = full_create();
        req.quantity = Some(-1);
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }
}
