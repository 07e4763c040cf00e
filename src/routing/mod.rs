//! Route oracles.
//!
//! - [`RouteOracle`] — resolves an ordered, anchored waypoint list into legs
//! - [`LocalRouteOracle`] — in-process oracle over any [`DistanceOracle`],
//!   using nearest-neighbor construction and 2-opt improvement
//!
//! [`DistanceOracle`]: crate::distance::DistanceOracle

mod local;
mod oracle;

pub use local::LocalRouteOracle;
pub use oracle::RouteOracle;
