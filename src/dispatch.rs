//! End-to-end dispatch pipeline.
//!
//! Runs the four stages strictly in order, each consuming the previous
//! stage's output by reference:
//!
//! 1. [`WarehouseAssigner`] — nearest warehouse per location
//! 2. [`FleetAllocator`] — vehicles per warehouse
//! 3. [`LoadPartitioner`] — stops per vehicle
//! 4. [`RouteAggregator`] — routes and distance totals

use tracing::{debug, info, warn};

use crate::aggregation::RouteAggregator;
use crate::allocation::{FleetAllocator, LoadPartitioner};
use crate::assignment::WarehouseAssigner;
use crate::config::DispatchConfig;
use crate::distance::DistanceOracle;
use crate::error::Result;
use crate::models::{Degradation, DispatchReport, Location, VehicleLoad};
use crate::routing::RouteOracle;

/// Assigns, allocates, partitions and routes a delivery run.
///
/// The dispatcher holds no state between runs; identical inputs and
/// deterministic oracles produce identical reports.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::DispatchConfig;
/// use u_dispatch::dispatch::Dispatcher;
/// use u_dispatch::distance::DistanceTable;
/// use u_dispatch::models::Location;
/// use u_dispatch::routing::LocalRouteOracle;
///
/// let points = [("W", 0.0, 0.0), ("A", 3000.0, 4000.0), ("B", 0.0, 2000.0)];
/// let table = DistanceTable::from_coordinates(
///     &points.map(|(id, x, y)| (Location::new(id), x, y)),
/// );
/// let router = LocalRouteOracle::new(&table);
///
/// let report = Dispatcher::new(&table, &router, DispatchConfig::new(1))
///     .run(&[Location::new("W")], &["A", "B"].map(Location::new))
///     .unwrap();
/// assert_eq!(report.warehouses()[0].allocated_vehicles(), 1);
/// // W -> B -> A -> W = 2 + sqrt(13) + 5 km
/// let expected = 2.0 + 13f64.sqrt() + 5.0;
/// assert!((report.total_distance_km() - expected).abs() < 1e-9);
/// assert!(!report.is_degraded());
/// ```
#[derive(Debug)]
pub struct Dispatcher<'a, D: ?Sized, R: ?Sized> {
    distances: &'a D,
    routes: &'a R,
    config: DispatchConfig,
}

impl<'a, D, R> Dispatcher<'a, D, R>
where
    D: DistanceOracle + ?Sized,
    R: RouteOracle + ?Sized,
{
    /// Creates a dispatcher over the given oracles.
    pub fn new(distances: &'a D, routes: &'a R, config: DispatchConfig) -> Self {
        Self {
            distances,
            routes,
            config,
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Runs the full pipeline.
    ///
    /// # Errors
    ///
    /// Fails fast on precondition violations (no warehouses, zero fleet,
    /// a fleet smaller than the number of loaded warehouses, invalid
    /// fallback or unit settings) and on internal invariant violations.
    /// Oracle failures never cause an error; they are counted in the
    /// report's [`Degradation`].
    pub fn run(&self, warehouses: &[Location], locations: &[Location]) -> Result<DispatchReport> {
        self.config.validate(warehouses.len())?;
        info!(
            "Dispatching {} locations from {} warehouses with {} vehicles",
            locations.len(),
            warehouses.len(),
            self.config.fleet_size()
        );

        let assignment = WarehouseAssigner::new(self.distances)
            .with_fallback(self.config.fallback_warehouse())
            .with_parallel(self.config.parallel())
            .assign(warehouses, locations)?;
        assignment.verify_covers(locations)?;
        debug!("Assigned counts: {:?}", assignment.counts());

        let allocation = FleetAllocator::new(self.config.fleet_size()).allocate(&assignment)?;

        let loads = assignment
            .iter()
            .enumerate()
            .map(|(w, (warehouse, stops))| {
                LoadPartitioner::new(allocation.vehicles(w)).partition(warehouse, stops)
            })
            .collect::<Result<Vec<VehicleLoad>>>()?;

        let warehouse_reports = RouteAggregator::new(self.routes)
            .with_unit_divisor(self.config.distance_unit_divisor())
            .with_parallel(self.config.parallel())
            .aggregate(&assignment, &allocation, &loads)?;

        let failed_routes = warehouse_reports
            .iter()
            .flat_map(|w| w.vehicles())
            .filter(|v| v.is_degraded())
            .count();
        let degradation = Degradation {
            unavailable_distances: assignment.unavailable_distances(),
            fallback_assignments: assignment.fallbacks().len(),
            failed_routes,
            duplicate_locations: assignment.duplicates(),
        };
        if degradation.is_degraded() {
            warn!(
                "Dispatch degraded: {} fallback assignments, {} failed routes",
                degradation.fallback_assignments, degradation.failed_routes
            );
        }

        let report = DispatchReport::new(warehouse_reports, degradation);
        info!("Total distance: {:.2} km", report.total_distance_km());
        Ok(report)
    }
}

/// Runs a dispatch with default settings for the given fleet size.
///
/// Equivalent to [`Dispatcher::run`] with [`DispatchConfig::new`].
pub fn allocate_and_route<D, R>(
    distances: &D,
    routes: &R,
    warehouses: &[Location],
    locations: &[Location],
    fleet_size: usize,
) -> Result<DispatchReport>
where
    D: DistanceOracle + ?Sized,
    R: RouteOracle + ?Sized,
{
    Dispatcher::new(distances, routes, DispatchConfig::new(fleet_size)).run(warehouses, locations)
}
