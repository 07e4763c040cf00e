//! Proportional fleet allocation.
//!
//! # Algorithm
//!
//! Each warehouse first receives `round(count / total * fleet_size)`
//! vehicles, floored at one when it has any load. Rounding is half-to-even.
//! The signed remainder `fleet_size - Σ raw` is then added in one piece to
//! the warehouse with the most assigned locations (first in input order on
//! ties). This is not a largest-remainder apportionment: the whole
//! correction lands on a single warehouse.

use tracing::debug;

use crate::error::{DispatchError, Result};
use crate::models::{Assignment, FleetAllocation};

/// Apportions a fixed fleet across warehouses by assigned load.
///
/// # Examples
///
/// ```
/// use u_dispatch::allocation::FleetAllocator;
/// use u_dispatch::assignment::WarehouseAssigner;
/// use u_dispatch::distance::DistanceTable;
/// use u_dispatch::models::Location;
///
/// let mut table = DistanceTable::new();
/// for (id, near) in [("A", "X"), ("B", "X"), ("C", "X"), ("D", "X"), ("E", "Y"), ("F", "Y")] {
///     let far = if near == "X" { "Y" } else { "X" };
///     table.insert(near, id, 100.0);
///     table.insert(far, id, 900.0);
/// }
/// let warehouses = ["X", "Y"].map(Location::new);
/// let locations = ["A", "B", "C", "D", "E", "F"].map(Location::new);
/// let assignment = WarehouseAssigner::new(&table).assign(&warehouses, &locations).unwrap();
///
/// let allocation = FleetAllocator::new(10).allocate(&assignment).unwrap();
/// assert_eq!(allocation.counts(), &[7, 3]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FleetAllocator {
    fleet_size: usize,
}

impl FleetAllocator {
    /// Creates an allocator for a fleet of the given size.
    pub fn new(fleet_size: usize) -> Self {
        Self { fleet_size }
    }

    /// Total vehicles to apportion.
    pub fn fleet_size(&self) -> usize {
        self.fleet_size
    }

    /// Computes vehicles per warehouse.
    ///
    /// # Errors
    ///
    /// [`DispatchError::ZeroFleet`] for an empty fleet,
    /// [`DispatchError::FleetTooSmall`] when there are fewer vehicles than
    /// loaded warehouses, and [`DispatchError::AllocationUnderflow`] if the
    /// remainder correction would leave a loaded warehouse without a
    /// vehicle.
    pub fn allocate(&self, assignment: &Assignment) -> Result<FleetAllocation> {
        if self.fleet_size == 0 {
            return Err(DispatchError::ZeroFleet);
        }
        let required = assignment.num_loaded();
        if self.fleet_size < required {
            return Err(DispatchError::FleetTooSmall {
                fleet_size: self.fleet_size,
                required,
            });
        }

        let counts = assignment.counts();
        let total = assignment.total_assigned();
        let fleet = self.fleet_size as f64;

        let mut raw: Vec<i64> = counts
            .iter()
            .map(|&count| {
                if count == 0 {
                    return 0;
                }
                let proportion = count as f64 / total as f64;
                ((proportion * fleet).round_ties_even() as i64).max(1)
            })
            .collect();

        let diff = self.fleet_size as i64 - raw.iter().sum::<i64>();
        if diff != 0 {
            let largest = largest_warehouse(&counts);
            debug!(
                "Patching remainder {diff:+} onto {}",
                assignment.warehouses()[largest]
            );
            raw[largest] += diff;
            let floor = if counts[largest] > 0 { 1 } else { 0 };
            if raw[largest] < floor {
                return Err(DispatchError::AllocationUnderflow {
                    warehouse: assignment.warehouses()[largest].clone(),
                });
            }
        }

        let counts: Vec<usize> = raw.into_iter().map(|n| n as usize).collect();
        debug!("Fleet of {} allocated as {counts:?}", self.fleet_size);
        Ok(FleetAllocation::new(assignment.warehouses().to_vec(), counts))
    }
}

/// Index of the largest count; the first one wins ties.
fn largest_warehouse(counts: &[usize]) -> usize {
    let mut best = 0;
    for (i, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    fn assignment(counts: &[usize]) -> Assignment {
        let warehouses = (0..counts.len())
            .map(|w| Location::new(format!("W{w}")))
            .collect();
        let mut a = Assignment::new(warehouses);
        for (w, &count) in counts.iter().enumerate() {
            for i in 0..count {
                a.assign(w, Location::new(format!("L{w}-{i}")));
            }
        }
        a
    }

    fn allocate(counts: &[usize], fleet: usize) -> Vec<usize> {
        FleetAllocator::new(fleet)
            .allocate(&assignment(counts))
            .expect("valid")
            .counts()
            .to_vec()
    }

    #[test]
    fn test_exact_proportions() {
        assert_eq!(allocate(&[4, 2], 10), vec![7, 3]);
        assert_eq!(allocate(&[4, 2], 9), vec![6, 3]);
    }

    #[test]
    fn test_remainder_goes_to_largest() {
        // 1/3 * 10 = 3.33 -> 3 each, sum 9, +1 to the first largest
        assert_eq!(allocate(&[2, 2, 2], 10), vec![4, 3, 3]);
        // 9/8 -> 1, 27/8 -> 3, sum 8, +1 to the first of the tied largest
        assert_eq!(allocate(&[1, 3, 3, 1], 9), vec![1, 4, 3, 1]);
    }

    #[test]
    fn test_negative_remainder() {
        // round(2.4) = 2, then round(0.3) floored to 1 twice: sum 4, -1 to W0
        assert_eq!(allocate(&[8, 1, 1], 3), vec![1, 1, 1]);
    }

    #[test]
    fn test_half_to_even() {
        // 0.5 * 5 = 2.5 -> 2, 2 -> sum 4, remainder +1 to W0
        assert_eq!(allocate(&[1, 1], 5), vec![3, 2]);
        // 0.5 * 7 = 3.5 -> 4, 4 -> sum 8, remainder -1 to W0
        assert_eq!(allocate(&[1, 1], 7), vec![3, 4]);
    }

    #[test]
    fn test_empty_warehouse_gets_zero() {
        assert_eq!(allocate(&[0, 5], 4), vec![0, 4]);
        assert_eq!(allocate(&[5, 0, 1], 4), vec![3, 0, 1]);
    }

    #[test]
    fn test_no_locations_gives_fleet_to_first() {
        assert_eq!(allocate(&[0, 0], 6), vec![6, 0]);
    }

    #[test]
    fn test_sum_matches_fleet() {
        for fleet in 3..40 {
            let counts = allocate(&[7, 3, 1], fleet);
            assert_eq!(counts.iter().sum::<usize>(), fleet);
            assert!(counts.iter().all(|&n| n >= 1));
        }
    }

    #[test]
    fn test_preconditions() {
        assert!(matches!(
            FleetAllocator::new(0).allocate(&assignment(&[1])),
            Err(DispatchError::ZeroFleet)
        ));
        assert!(matches!(
            FleetAllocator::new(1).allocate(&assignment(&[1, 1])),
            Err(DispatchError::FleetTooSmall {
                fleet_size: 1,
                required: 2
            })
        ));
    }

    #[test]
    fn test_underflow_reported() {
        // 1.5 rounds to 2 four times: sum 8, the -2 patch empties W0
        assert!(matches!(
            FleetAllocator::new(6).allocate(&assignment(&[3, 3, 3, 3])),
            Err(DispatchError::AllocationUnderflow { warehouse }) if warehouse.id() == "W0"
        ));
    }

    #[test]
    fn test_largest_warehouse_tie() {
        assert_eq!(largest_warehouse(&[2, 5, 5]), 1);
        assert_eq!(largest_warehouse(&[0, 0]), 0);
    }
}
