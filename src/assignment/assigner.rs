//! Warehouse assigner.
//!
//! # Algorithm
//!
//! Every location is measured against every warehouse exactly once; the
//! results are cached in a [`DistanceMatrix`] for the duration of the call.
//! Each location then goes to its minimum-distance warehouse, with ties
//! resolved by warehouse input order. A location with no usable distance
//! to any warehouse goes to the fallback warehouse.

use std::collections::HashSet;

use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::distance::{DistanceMatrix, DistanceOracle};
use crate::error::{DispatchError, Result};
use crate::models::{Assignment, Location};

/// Assigns delivery locations to their nearest warehouse.
///
/// # Examples
///
/// ```
/// use u_dispatch::assignment::WarehouseAssigner;
/// use u_dispatch::distance::DistanceTable;
/// use u_dispatch::models::Location;
///
/// let table = DistanceTable::new()
///     .with_distance("W1", "A", 900.0)
///     .with_distance("W2", "A", 300.0)
///     .with_distance("W1", "B", 100.0)
///     .with_distance("W2", "B", 700.0);
/// let warehouses = [Location::new("W1"), Location::new("W2")];
/// let locations = [Location::new("A"), Location::new("B")];
///
/// let assignment = WarehouseAssigner::new(&table)
///     .assign(&warehouses, &locations)
///     .unwrap();
/// assert_eq!(assignment.stops(0), &[Location::new("B")]);
/// assert_eq!(assignment.stops(1), &[Location::new("A")]);
/// ```
#[derive(Debug)]
pub struct WarehouseAssigner<'a, D: ?Sized> {
    oracle: &'a D,
    fallback: usize,
    parallel: bool,
}

impl<'a, D: DistanceOracle + ?Sized> WarehouseAssigner<'a, D> {
    /// Creates an assigner that falls back to the first warehouse.
    pub fn new(oracle: &'a D) -> Self {
        Self {
            oracle,
            fallback: 0,
            parallel: false,
        }
    }

    /// Sets the input index of the fallback warehouse.
    pub fn with_fallback(mut self, index: usize) -> Self {
        self.fallback = index;
        self
    }

    /// Queries locations concurrently.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds the assignment.
    ///
    /// Repeated locations are collapsed to their first occurrence. An empty
    /// location list yields an assignment with every set empty.
    ///
    /// # Errors
    ///
    /// [`DispatchError::NoWarehouses`] if `warehouses` is empty, and
    /// [`DispatchError::FallbackOutOfRange`] if the fallback index does not
    /// name a warehouse.
    pub fn assign(&self, warehouses: &[Location], locations: &[Location]) -> Result<Assignment> {
        if warehouses.is_empty() {
            return Err(DispatchError::NoWarehouses);
        }
        if self.fallback >= warehouses.len() {
            return Err(DispatchError::FallbackOutOfRange {
                index: self.fallback,
                warehouses: warehouses.len(),
            });
        }

        let unique = unique_locations(locations);
        let duplicates = locations.len() - unique.len();
        if duplicates > 0 {
            warn!("Dropped {duplicates} repeated delivery locations");
        }

        let distances = self.measure(warehouses, &unique);
        let unavailable = distances.num_missing();
        debug!(
            "Measured {} warehouse/location pairs, {unavailable} unavailable",
            warehouses.len() * unique.len()
        );

        let mut assignment = Assignment::new(warehouses.to_vec());
        for (l, location) in unique.into_iter().enumerate() {
            match distances.nearest(l) {
                Some((w, d)) => {
                    trace!("{location} -> {} ({d})", warehouses[w]);
                    assignment.assign(w, location);
                }
                None => {
                    warn!(
                        "No distance from any warehouse to {location}; assigning to fallback {}",
                        warehouses[self.fallback]
                    );
                    assignment.assign_fallback(self.fallback, location);
                }
            }
        }
        assignment.set_unavailable_distances(unavailable);
        assignment.set_duplicates(duplicates);
        Ok(assignment)
    }

    fn measure(&self, warehouses: &[Location], locations: &[Location]) -> DistanceMatrix {
        let column = |location: &Location| -> Vec<Option<f64>> {
            warehouses
                .iter()
                .map(|warehouse| self.query(warehouse, location))
                .collect()
        };
        let columns: Vec<Vec<Option<f64>>> = if self.parallel {
            locations.par_iter().map(column).collect()
        } else {
            locations.iter().map(column).collect()
        };
        let mut distances = DistanceMatrix::new(warehouses.len(), locations.len());
        for (l, column) in columns.into_iter().enumerate() {
            debug_assert_eq!(column.len(), warehouses.len());
            for (w, entry) in column.into_iter().enumerate() {
                if let Some(d) = entry {
                    distances.set(w, l, d);
                }
            }
        }
        distances
    }

    fn query(&self, warehouse: &Location, location: &Location) -> Option<f64> {
        match self.oracle.query(warehouse, location) {
            Ok(d) if d.is_finite() && d >= 0.0 => Some(d),
            Ok(d) => {
                warn!("Discarding invalid distance {d} from {warehouse} to {location}");
                None
            }
            Err(e) => {
                debug!("Distance from {warehouse} to {location}: {e}");
                None
            }
        }
    }
}

fn unique_locations(locations: &[Location]) -> Vec<Location> {
    let mut seen = HashSet::with_capacity(locations.len());
    locations
        .iter()
        .filter(|l| seen.insert(*l))
        .cloned()
        .collect()
}
