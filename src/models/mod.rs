//! Domain model types for depot assignment and fleet dispatch.
//!
//! Each pipeline stage produces one of these structures and hands it to the
//! next stage by shared reference: assignments of locations to warehouses,
//! per-warehouse vehicle counts, per-vehicle loads, realized routes, and the
//! final report.

mod allocation;
mod assignment;
mod load;
mod location;
mod report;
mod route;

pub use allocation::FleetAllocation;
pub use assignment::Assignment;
pub use load::VehicleLoad;
pub use location::Location;
pub use report::{Degradation, DispatchReport, VehicleReport, WarehouseReport};
pub use route::{Leg, Route};
