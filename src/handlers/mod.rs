pub mod inventories;
pub mod warehouses;

pub use inventories::*;
pub use warehouses::*;
