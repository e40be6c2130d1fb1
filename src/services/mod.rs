pub mod inventory_service;
pub mod warehouse_service;

pub use inventory_service::*;
pub use warehouse_service::*;
