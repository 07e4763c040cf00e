//! Route oracle trait.

use crate::error::Unavailable;
use crate::models::{Leg, Location};

/// Resolves a closed multi-stop trip into realized legs.
///
/// `waypoints` starts and ends with fixed anchors (a vehicle's warehouse);
/// the stops in between may be reordered. The returned legs follow driving
/// order and the final leg arrives back at the end anchor. Leg labels are
/// the oracle's resolved names and need not equal the submitted
/// identifiers.
///
/// An empty leg list is treated the same as [`Unavailable`] by the engine.
pub trait RouteOracle: Sync {
    /// Orders the intermediate stops and returns the realized legs.
    fn optimize(&self, waypoints: &[Location]) -> Result<Vec<Leg>, Unavailable>;
}

impl<T: RouteOracle + ?Sized> RouteOracle for &T {
    fn optimize(&self, waypoints: &[Location]) -> Result<Vec<Leg>, Unavailable> {
        (**self).optimize(waypoints)
    }
}

impl<T: RouteOracle + ?Sized> RouteOracle for Box<T> {
    fn optimize(&self, waypoints: &[Location]) -> Result<Vec<Leg>, Unavailable> {
        (**self).optimize(waypoints)
    }
}
