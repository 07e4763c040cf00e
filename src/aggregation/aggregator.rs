//! Route aggregator.
//!
//! Every non-empty vehicle load becomes one closed trip
//! `[warehouse, stops…, warehouse]` submitted to the route oracle. The
//! realized leg distances are summed per vehicle, converted to reporting
//! units, and rolled up per warehouse. A vehicle whose route cannot be
//! resolved is still reported, with an empty route and zero distance.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::config::{check_unit_divisor, DEFAULT_UNIT_DIVISOR};
use crate::error;
use crate::models::{
    Assignment, FleetAllocation, Location, Route, VehicleLoad, VehicleReport, WarehouseReport,
};
use crate::routing::RouteOracle;

/// One vehicle's trip, identified by warehouse index and local vehicle id.
struct Trip<'l> {
    warehouse: usize,
    vehicle: usize,
    stops: &'l [Location],
}

/// Routes vehicle loads and aggregates their distances.
#[derive(Debug)]
pub struct RouteAggregator<'a, R: ?Sized> {
    oracle: &'a R,
    unit_divisor: f64,
    parallel: bool,
}

impl<'a, R: RouteOracle + ?Sized> RouteAggregator<'a, R> {
    /// Creates an aggregator reporting kilometres from metre legs.
    pub fn new(oracle: &'a R) -> Self {
        Self {
            oracle,
            unit_divisor: DEFAULT_UNIT_DIVISOR,
            parallel: false,
        }
    }

    /// Sets the divisor from oracle units to reporting units.
    ///
    /// The divisor must be finite and positive; [`aggregate`](Self::aggregate)
    /// rejects anything else.
    pub fn with_unit_divisor(mut self, divisor: f64) -> Self {
        self.unit_divisor = divisor;
        self
    }

    /// Resolves vehicle routes concurrently.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds the closed route for one vehicle.
    ///
    /// Oracle failure, an empty leg list, or an invalid leg distance all
    /// yield an empty route.
    pub fn route_vehicle(&self, warehouse: &Location, vehicle: usize, stops: &[Location]) -> Route {
        let mut waypoints = Vec::with_capacity(stops.len() + 2);
        waypoints.push(warehouse.clone());
        waypoints.extend_from_slice(stops);
        waypoints.push(warehouse.clone());

        match self.oracle.optimize(&waypoints) {
            Ok(legs) if legs.is_empty() => {
                warn!("Route oracle returned no legs for vehicle {vehicle} at {warehouse}");
                Route::new(vehicle)
            }
            Ok(legs) if legs.iter().any(|l| !l.distance.is_finite() || l.distance < 0.0) => {
                warn!(
                    "Route oracle returned an invalid leg distance for vehicle {vehicle} at {warehouse}"
                );
                Route::new(vehicle)
            }
            Ok(legs) => Route::from_legs(vehicle, legs),
            Err(e) => {
                warn!("Routing vehicle {vehicle} at {warehouse} failed: {e}");
                Route::new(vehicle)
            }
        }
    }

    /// Routes every non-empty load and rolls distances up per warehouse.
    ///
    /// `loads` is aligned with the assignment's warehouse order. Vehicles
    /// are numbered across the fleet in warehouse order, then by local
    /// vehicle id, independent of the order in which routes resolve.
    ///
    /// Fails with [`DispatchError::InvalidUnitDivisor`](crate::error::DispatchError::InvalidUnitDivisor)
    /// before any route is requested if the unit divisor is unusable.
    pub fn aggregate(
        &self,
        assignment: &Assignment,
        allocation: &FleetAllocation,
        loads: &[VehicleLoad],
    ) -> error::Result<Vec<WarehouseReport>> {
        check_unit_divisor(self.unit_divisor)?;
        let trips: Vec<Trip<'_>> = loads
            .iter()
            .enumerate()
            .flat_map(|(warehouse, load)| {
                load.non_empty().map(move |(vehicle, stops)| Trip {
                    warehouse,
                    vehicle,
                    stops,
                })
            })
            .collect();

        let warehouses = assignment.warehouses();
        let resolve = |trip: &Trip<'_>| {
            self.route_vehicle(&warehouses[trip.warehouse], trip.vehicle, trip.stops)
        };
        let routes: Vec<Route> = if self.parallel {
            trips.par_iter().map(resolve).collect()
        } else {
            trips.iter().map(resolve).collect()
        };
        debug!("Resolved {} vehicle routes", routes.len());

        let mut per_warehouse: Vec<Vec<VehicleReport>> = vec![Vec::new(); warehouses.len()];
        for (index, (trip, route)) in trips.iter().zip(routes).enumerate() {
            per_warehouse[trip.warehouse].push(VehicleReport::new(
                index + 1,
                trip.stops.to_vec(),
                route,
                self.unit_divisor,
            ));
        }

        Ok(warehouses
            .iter()
            .zip(per_warehouse)
            .enumerate()
            .map(|(w, (warehouse, vehicles))| {
                WarehouseReport::new(
                    warehouse.clone(),
                    assignment.stops(w).len(),
                    allocation.vehicles(w),
                    vehicles,
                )
            })
            .collect())
    }
}
