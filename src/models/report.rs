//! Dispatch report types.

use serde::Serialize;

use super::{Location, Route};
use crate::error::Result;

/// Counts of oracle failures and input anomalies absorbed during a run.
///
/// A report is always produced once preconditions pass; these counters let
/// callers decide whether the coverage is acceptable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Degradation {
    /// Warehouse-to-location distance queries that returned nothing usable.
    pub unavailable_distances: usize,
    /// Locations placed at the fallback warehouse.
    pub fallback_assignments: usize,
    /// Vehicles whose route could not be resolved.
    pub failed_routes: usize,
    /// Repeated input locations that were collapsed.
    pub duplicate_locations: usize,
}

impl Degradation {
    /// Returns `true` if any fallback or failed route occurred.
    ///
    /// Individual unavailable distances only degrade the result when they
    /// force a fallback, so they are not counted here.
    pub fn is_degraded(&self) -> bool {
        self.fallback_assignments > 0 || self.failed_routes > 0
    }
}

/// Result for one vehicle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleReport {
    vehicle_id: usize,
    fleet_number: usize,
    assigned: Vec<Location>,
    route: Route,
    distance_km: f64,
}

impl VehicleReport {
    pub(crate) fn new(
        fleet_number: usize,
        assigned: Vec<Location>,
        route: Route,
        unit_divisor: f64,
    ) -> Self {
        let distance_km = route.total_distance() / unit_divisor;
        Self {
            vehicle_id: route.vehicle_id(),
            fleet_number,
            assigned,
            route,
            distance_km,
        }
    }

    /// Vehicle index within its warehouse.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// 1-based vehicle number across the whole fleet, in report order.
    pub fn fleet_number(&self) -> usize {
        self.fleet_number
    }

    /// Locations this vehicle was loaded with, in partition order.
    pub fn assigned(&self) -> &[Location] {
        &self.assigned
    }

    /// The realized route; empty when the route oracle failed.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Route distance in reporting units.
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Returns `true` if the route oracle returned no legs for this vehicle.
    pub fn is_degraded(&self) -> bool {
        self.route.is_empty()
    }
}

/// Result for one warehouse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarehouseReport {
    warehouse: Location,
    assigned_locations: usize,
    allocated_vehicles: usize,
    vehicles: Vec<VehicleReport>,
    distance_km: f64,
}

impl WarehouseReport {
    pub(crate) fn new(
        warehouse: Location,
        assigned_locations: usize,
        allocated_vehicles: usize,
        vehicles: Vec<VehicleReport>,
    ) -> Self {
        let distance_km = vehicles.iter().map(VehicleReport::distance_km).sum();
        Self {
            warehouse,
            assigned_locations,
            allocated_vehicles,
            vehicles,
            distance_km,
        }
    }

    /// The warehouse.
    pub fn warehouse(&self) -> &Location {
        &self.warehouse
    }

    /// Number of locations assigned to this warehouse.
    pub fn assigned_locations(&self) -> usize {
        self.assigned_locations
    }

    /// Number of vehicles apportioned to this warehouse.
    pub fn allocated_vehicles(&self) -> usize {
        self.allocated_vehicles
    }

    /// Reports for vehicles that carried at least one stop.
    pub fn vehicles(&self) -> &[VehicleReport] {
        &self.vehicles
    }

    /// Sum of this warehouse's vehicle distances, in reporting units.
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }
}

/// Fleet-wide outcome of a dispatch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatchReport {
    warehouses: Vec<WarehouseReport>,
    total_distance_km: f64,
    degradation: Degradation,
}

impl DispatchReport {
    pub(crate) fn new(warehouses: Vec<WarehouseReport>, degradation: Degradation) -> Self {
        let total_distance_km = warehouses.iter().map(WarehouseReport::distance_km).sum();
        Self {
            warehouses,
            total_distance_km,
            degradation,
        }
    }

    /// Per-warehouse results in warehouse input order.
    pub fn warehouses(&self) -> &[WarehouseReport] {
        &self.warehouses
    }

    /// The result for a specific warehouse.
    pub fn warehouse(&self, warehouse: &Location) -> Option<&WarehouseReport> {
        self.warehouses.iter().find(|w| w.warehouse() == warehouse)
    }

    /// Every routed vehicle, in fleet-number order.
    pub fn vehicles(&self) -> impl Iterator<Item = &VehicleReport> {
        self.warehouses.iter().flat_map(|w| w.vehicles().iter())
    }

    /// Sum of all warehouse distances, in reporting units.
    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// Degradation counters for this run.
    pub fn degradation(&self) -> &Degradation {
        &self.degradation
    }

    /// Returns `true` if any part of the result relied on a fallback.
    pub fn is_degraded(&self) -> bool {
        self.degradation.is_degraded()
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
