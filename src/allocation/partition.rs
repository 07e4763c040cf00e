//! Round-robin load partitioning.

use crate::error::{DispatchError, Result};
use crate::models::{Location, VehicleLoad};

/// Splits a warehouse's stops across its vehicles.
///
/// Stop `i` goes to vehicle `i mod vehicles`, so loads differ by at most
/// one stop and the split depends only on input order.
///
/// # Examples
///
/// ```
/// use u_dispatch::allocation::LoadPartitioner;
/// use u_dispatch::models::Location;
///
/// let stops = ["A", "B", "C", "D", "E"].map(Location::new);
/// let load = LoadPartitioner::new(2)
///     .partition(&Location::new("W"), &stops)
///     .unwrap();
/// assert_eq!(load.stops(0), &["A", "C", "E"].map(Location::new));
/// assert_eq!(load.stops(1), &["B", "D"].map(Location::new));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LoadPartitioner {
    vehicles: usize,
}

impl LoadPartitioner {
    /// Creates a partitioner for the given number of vehicles.
    pub fn new(vehicles: usize) -> Self {
        Self { vehicles }
    }

    /// Deals `stops` out to the vehicles of `warehouse`.
    ///
    /// Vehicles beyond the number of stops stay empty.
    ///
    /// # Errors
    ///
    /// [`DispatchError::NoVehicles`] if there are stops but no vehicles.
    pub fn partition(&self, warehouse: &Location, stops: &[Location]) -> Result<VehicleLoad> {
        if self.vehicles == 0 && !stops.is_empty() {
            return Err(DispatchError::NoVehicles {
                warehouse: warehouse.clone(),
                stops: stops.len(),
            });
        }
        let mut loads = vec![Vec::new(); self.vehicles];
        for (i, stop) in stops.iter().enumerate() {
            loads[i % self.vehicles].push(stop.clone());
        }
        Ok(VehicleLoad::new(loads))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops(n: usize) -> Vec<Location> {
        (0..n).map(|i| Location::new(format!("S{i}"))).collect()
    }

    #[test]
    fn test_even_split() {
        let load = LoadPartitioner::new(3)
            .partition(&Location::new("W"), &stops(8))
            .expect("vehicles available");
        assert_eq!(load.num_vehicles(), 3);
        assert_eq!(load.total_stops(), 8);
        assert!(load.spread() <= 1);
        assert_eq!(load.stops(2), &[Location::new("S2"), Location::new("S5")]);
    }

    #[test]
    fn test_more_vehicles_than_stops() {
        let load = LoadPartitioner::new(5)
            .partition(&Location::new("W"), &stops(2))
            .expect("vehicles available");
        assert_eq!(load.num_vehicles(), 5);
        assert_eq!(load.non_empty().count(), 2);
    }

    #[test]
    fn test_no_vehicles() {
        assert!(matches!(
            LoadPartitioner::new(0).partition(&Location::new("W"), &stops(1)),
            Err(DispatchError::NoVehicles { stops: 1, .. })
        ));
        let load = LoadPartitioner::new(0)
            .partition(&Location::new("W"), &[])
            .expect("nothing to carry");
        assert_eq!(load.num_vehicles(), 0);
    }
}
