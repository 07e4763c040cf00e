//! Distance oracles and the per-run distance cache.
//!
//! - [`DistanceOracle`] — point-to-point distance source consumed by the engine
//! - [`DistanceMatrix`] — sparse warehouse × location cache built during assignment
//! - [`DistanceTable`] — lookup-table oracle, optionally built from coordinates
//! - [`ScatterOracle`] — seeded synthetic oracle for tests and dry runs

mod matrix;
mod oracle;
mod scatter;
mod table;

pub use matrix::DistanceMatrix;
pub use oracle::DistanceOracle;
pub use scatter::ScatterOracle;
pub use table::DistanceTable;
