//! Fleet apportionment and per-vehicle load partitioning.
//!
//! - [`FleetAllocator`] — vehicles per warehouse, proportional to load
//! - [`LoadPartitioner`] — round-robin split of a warehouse's stops

mod fleet;
mod partition;

pub use fleet::FleetAllocator;
pub use partition::LoadPartitioner;
