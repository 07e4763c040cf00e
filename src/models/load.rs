//! Per-vehicle load type.

use super::Location;

/// The stops carried by each vehicle of one warehouse.
///
/// Vehicle identifiers are local to the warehouse (`0..num_vehicles`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleLoad {
    loads: Vec<Vec<Location>>,
}

impl VehicleLoad {
    pub(crate) fn new(loads: Vec<Vec<Location>>) -> Self {
        Self { loads }
    }

    /// Number of vehicles, including ones that carry nothing.
    pub fn num_vehicles(&self) -> usize {
        self.loads.len()
    }

    /// Stops carried by vehicle `vehicle`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn stops(&self, vehicle: usize) -> &[Location] {
        &self.loads[vehicle]
    }

    /// Iterates `(vehicle_id, stops)` over vehicles with at least one stop.
    ///
    /// Empty vehicles are skipped; they are never sent to a route oracle.
    pub fn non_empty(&self) -> impl Iterator<Item = (usize, &[Location])> {
        self.loads
            .iter()
            .enumerate()
            .filter(|(_, stops)| !stops.is_empty())
            .map(|(id, stops)| (id, stops.as_slice()))
    }

    /// Total stops across all vehicles.
    pub fn total_stops(&self) -> usize {
        self.loads.iter().map(Vec::len).sum()
    }

    /// Difference between the largest and smallest vehicle load.
    pub fn spread(&self) -> usize {
        let max = self.loads.iter().map(Vec::len).max().unwrap_or(0);
        let min = self.loads.iter().map(Vec::len).min().unwrap_or(0);
        max - min
    }
}
