pub mod inventory;
pub mod warehouse;

pub use inventory::*;
pub use warehouse::*;
