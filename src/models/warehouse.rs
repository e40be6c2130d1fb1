use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: i64,
    pub warehouse_name: String,
    pub address: String,
    pub city: String,
    pub country: Option<String>,
    pub contact_name: String,
    pub contact_position: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateWarehouseRequest {
    pub warehouse_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub contact_name: Option<String>,
    pub contact_position: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
}

impl CreateWarehouseRequest {
    pub fn validate(&self) -> AppResult<()> {
        if is_missing(&self.warehouse_name)
            || is_missing(&self.address)
            || is_missing(&self.city)
            || is_missing(&self.contact_name)
            || is_missing(&self.contact_email)
        {
            return Err(AppError::BadRequest(
                "Required fields are missing".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWarehouseRequest {
    pub warehouse_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub contact_name: Option<String>,
    pub contact_position: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
}

impl UpdateWarehouseRequest {
    /// Replace semantics: every business field must be present on update.
    pub fn validate(&self) -> AppResult<()> {
        if is_missing(&self.warehouse_name)
            || is_missing(&self.address)
            || is_missing(&self.city)
            || is_missing(&self.country)
            || is_missing(&self.contact_name)
            || is_missing(&self.contact_position)
            || is_missing(&self.contact_phone)
            || is_missing(&self.contact_email)
        {
            return Err(AppError::BadRequest(
                "Required fields are missing".to_string(),
            ));
        }

        let contact_phone = self.contact_phone.as_deref().unwrap_or_default();
        if !PHONE_REGEX.is_match(contact_phone) {
            return Err(AppError::BadRequest(
                "Invalid phone number format".to_string(),
            ));
        }

        let contact_email = self.contact_email.as_deref().unwrap_or_default();
        if !EMAIL_REGEX.is_match(contact_email) {
            return Err(AppError::BadRequest("Invalid email format".to_string()));
        }

        Ok(())
    }
}

pub(crate) fn is_missing(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, str::is_empty)
}

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref PHONE_REGEX: Regex =
        Regex::new(r"^\+?(\d{1,3})?[-.\s]?(\(\d{1,3}\)|\d{1,3})[-.\s]?\d{3}[-.\s]?\d{4}$").unwrap();
    pub static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}
