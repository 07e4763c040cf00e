//! Nearest-warehouse assignment.

mod assigner;

pub use assigner::WarehouseAssigner;
