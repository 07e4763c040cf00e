//! Route and leg types.

use serde::Serialize;

/// One realized leg of a route, as resolved by a route oracle.
///
/// `stop` is the oracle's label for the leg's end point, which may differ
/// from the identifier that was submitted (e.g. a postcode resolved to a
/// full street address).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    /// Resolved label of the stop this leg arrives at.
    pub stop: String,
    /// Leg distance in oracle units.
    pub distance: f64,
}

impl Leg {
    /// Creates a leg.
    pub fn new(stop: impl Into<String>, distance: f64) -> Self {
        Self {
            stop: stop.into(),
            distance,
        }
    }
}

/// The ordered legs driven by a single vehicle.
///
/// The route departs from and returns to the vehicle's warehouse; the final
/// leg is the return leg.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Leg, Route};
///
/// let route = Route::from_legs(0, vec![
///     Leg::new("1 Market St", 1200.0),
///     Leg::new("Depot", 800.0),
/// ]);
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.stops(), vec!["1 Market St", "Depot"]);
/// assert_eq!(route.total_distance(), 2000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    vehicle_id: usize,
    legs: Vec<Leg>,
    total_distance: f64,
}

impl Route {
    /// Creates an empty route for the given vehicle.
    pub fn new(vehicle_id: usize) -> Self {
        Self {
            vehicle_id,
            legs: Vec::new(),
            total_distance: 0.0,
        }
    }

    /// Creates a route from realized legs.
    pub fn from_legs(vehicle_id: usize, legs: Vec<Leg>) -> Self {
        let mut route = Self::new(vehicle_id);
        for leg in legs {
            route.push_leg(leg);
        }
        route
    }

    /// Appends a leg to the end of this route.
    pub fn push_leg(&mut self, leg: Leg) {
        self.total_distance += leg.distance;
        self.legs.push(leg);
    }

    /// Returns the vehicle assigned to this route.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// Returns the ordered legs.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Returns the resolved stop labels in driving order.
    pub fn stops(&self) -> Vec<&str> {
        self.legs.iter().map(|l| l.stop.as_str()).collect()
    }

    /// Number of legs.
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Returns `true` if this route has no legs.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Sum of leg distances, in oracle units.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_empty() {
        let r = Route::new(3);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.vehicle_id(), 3);
        assert_eq!(r.total_distance(), 0.0);
    }

    #[test]
    fn test_route_push_leg() {
        let mut r = Route::new(1);
        r.push_leg(Leg::new("A", 500.0));
        r.push_leg(Leg::new("B", 250.0));
        assert_eq!(r.len(), 2);
        assert_eq!(r.stops(), vec!["A", "B"]);
        assert!((r.total_distance() - 750.0).abs() < 1e-10);
    }

    #[test]
    fn test_leg_equality() {
        let a = Leg::new("A", 1.0);
        assert_eq!(a.clone(), a);
    }
}
