//! Warehouse assignment type.

use std::collections::HashSet;

use super::Location;
use crate::error::{DispatchError, Result};

/// A partition of delivery locations across warehouses.
///
/// Warehouses keep their input order; each warehouse's locations keep the
/// order in which they were assigned. Locations placed by the fallback
/// policy are additionally recorded so callers can see degraded coverage.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Assignment, Location};
///
/// let assignment = Assignment::new(vec![Location::new("W1"), Location::new("W2")]);
/// assert_eq!(assignment.num_warehouses(), 2);
/// assert_eq!(assignment.total_assigned(), 0);
/// assert!(assignment.stops(0).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    warehouses: Vec<Location>,
    stops: Vec<Vec<Location>>,
    fallbacks: Vec<Location>,
    unavailable_distances: usize,
    duplicates: usize,
}

impl Assignment {
    /// Creates an assignment with every warehouse's set empty.
    pub fn new(warehouses: Vec<Location>) -> Self {
        let stops = vec![Vec::new(); warehouses.len()];
        Self {
            warehouses,
            stops,
            fallbacks: Vec::new(),
            unavailable_distances: 0,
            duplicates: 0,
        }
    }

    pub(crate) fn set_unavailable_distances(&mut self, count: usize) {
        self.unavailable_distances = count;
    }

    pub(crate) fn set_duplicates(&mut self, count: usize) {
        self.duplicates = count;
    }

    /// Places `location` at the warehouse with input index `warehouse`.
    pub(crate) fn assign(&mut self, warehouse: usize, location: Location) {
        self.stops[warehouse].push(location);
    }

    /// Places `location` at `warehouse` because no distance was available.
    pub(crate) fn assign_fallback(&mut self, warehouse: usize, location: Location) {
        self.fallbacks.push(location.clone());
        self.assign(warehouse, location);
    }

    /// Warehouses in input order.
    pub fn warehouses(&self) -> &[Location] {
        &self.warehouses
    }

    /// Number of warehouses.
    pub fn num_warehouses(&self) -> usize {
        self.warehouses.len()
    }

    /// Locations assigned to the warehouse at input index `warehouse`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn stops(&self, warehouse: usize) -> &[Location] {
        &self.stops[warehouse]
    }

    /// Locations assigned to the given warehouse, if it is known.
    pub fn stops_for(&self, warehouse: &Location) -> Option<&[Location]> {
        self.warehouses
            .iter()
            .position(|w| w == warehouse)
            .map(|i| self.stops[i].as_slice())
    }

    /// Iterates `(warehouse, locations)` in warehouse input order.
    pub fn iter(&self) -> impl Iterator<Item = (&Location, &[Location])> {
        self.warehouses
            .iter()
            .zip(self.stops.iter().map(Vec::as_slice))
    }

    /// Assigned-location count per warehouse, in input order.
    pub fn counts(&self) -> Vec<usize> {
        self.stops.iter().map(Vec::len).collect()
    }

    /// Total number of assigned locations.
    pub fn total_assigned(&self) -> usize {
        self.stops.iter().map(Vec::len).sum()
    }

    /// Number of warehouses with at least one assigned location.
    pub fn num_loaded(&self) -> usize {
        self.stops.iter().filter(|s| !s.is_empty()).count()
    }

    /// Locations that were placed by the fallback policy.
    pub fn fallbacks(&self) -> &[Location] {
        &self.fallbacks
    }

    /// Number of warehouse-to-location queries with no usable distance.
    pub fn unavailable_distances(&self) -> usize {
        self.unavailable_distances
    }

    /// Number of repeated input locations that were dropped.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Checks that every location in `locations` is assigned to exactly one
    /// warehouse.
    ///
    /// A missing location yields [`DispatchError::Unassigned`]; a location
    /// held by two warehouses yields [`DispatchError::DuplicateAssignment`].
    pub fn verify_covers(&self, locations: &[Location]) -> Result<()> {
        let mut seen: HashSet<&Location> = HashSet::with_capacity(self.total_assigned());
        for location in self.stops.iter().flatten() {
            if !seen.insert(location) {
                return Err(DispatchError::DuplicateAssignment {
                    location: location.clone(),
                });
            }
        }
        for location in locations {
            if !seen.contains(location) {
                return Err(DispatchError::Unassigned {
                    location: location.clone(),
                });
            }
        }
        Ok(())
    }
}
