//! Fleet allocation type.

use serde::Serialize;

use super::Location;

/// Vehicle counts per warehouse.
///
/// Counts are aligned with the warehouse order of the [`Assignment`] they
/// were derived from and always sum to the requested fleet size.
///
/// [`Assignment`]: super::Assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FleetAllocation {
    warehouses: Vec<Location>,
    counts: Vec<usize>,
}

impl FleetAllocation {
    pub(crate) fn new(warehouses: Vec<Location>, counts: Vec<usize>) -> Self {
        debug_assert_eq!(warehouses.len(), counts.len());
        Self { warehouses, counts }
    }

    /// Vehicles allocated to the warehouse at input index `warehouse`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn vehicles(&self, warehouse: usize) -> usize {
        self.counts[warehouse]
    }

    /// Vehicles allocated to the given warehouse, if it is known.
    pub fn vehicles_for(&self, warehouse: &Location) -> Option<usize> {
        self.warehouses
            .iter()
            .position(|w| w == warehouse)
            .map(|i| self.counts[i])
    }

    /// Counts in warehouse input order.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Iterates `(warehouse, vehicles)` in warehouse input order.
    pub fn iter(&self) -> impl Iterator<Item = (&Location, usize)> {
        self.warehouses.iter().zip(self.counts.iter().copied())
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}
