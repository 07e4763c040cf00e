use u_dispatch::allocation::FleetAllocator;
use u_dispatch::assignment::WarehouseAssigner;
use u_dispatch::config::DispatchConfig;
use u_dispatch::distance::DistanceTable;
use u_dispatch::error::Unavailable;
use u_dispatch::models::{Leg, Location};
use u_dispatch::routing::RouteOracle;
use u_dispatch::{allocate_and_route, Dispatcher};

fn locs(ids: &[&str]) -> Vec<Location> {
    ids.iter().map(|&id| Location::new(id)).collect()
}

/// X is 1 km from L1..L4 and 5 km from L5, L6; Y the other way round.
fn six_locations() -> DistanceTable {
    let mut table = DistanceTable::new();
    for id in ["L1", "L2", "L3", "L4"] {
        table.insert("X", id, 1000.0);
        table.insert("Y", id, 5000.0);
    }
    for id in ["L5", "L6"] {
        table.insert("X", id, 5000.0);
        table.insert("Y", id, 1000.0);
    }
    table
}

/// Keeps the submitted order; every leg is 2 km. Returns no legs for
/// trips that visit `dead`.
struct Straight {
    dead: Option<&'static str>,
}

impl RouteOracle for Straight {
    fn optimize(&self, waypoints: &[Location]) -> Result<Vec<Leg>, Unavailable> {
        if let Some(dead) = self.dead {
            if waypoints.iter().any(|w| w.id() == dead) {
                return Ok(Vec::new());
            }
        }
        Ok(waypoints[1..]
            .iter()
            .map(|w| Leg::new(format!("{}, Lancaster", w.id()), 2000.0))
            .collect())
    }
}

#[test]
fn scenario_a_proportional_allocation() {
    let table = six_locations();
    let warehouses = locs(&["X", "Y"]);
    let assignment = WarehouseAssigner::new(&table)
        .assign(&warehouses, &locs(&["L1", "L2", "L3", "L4", "L5", "L6"]))
        .expect("valid");
    assert_eq!(assignment.counts(), vec![4, 2]);

    let allocation = FleetAllocator::new(10).allocate(&assignment).expect("valid");
    assert_eq!(allocation.vehicles_for(&Location::new("X")), Some(7));
    assert_eq!(allocation.vehicles_for(&Location::new("Y")), Some(3));
}

#[test]
fn scenario_b_smaller_fleet() {
    let table = six_locations();
    let warehouses = locs(&["X", "Y"]);
    let assignment = WarehouseAssigner::new(&table)
        .assign(&warehouses, &locs(&["L1", "L2", "L3", "L4", "L5", "L6"]))
        .expect("valid");
    let allocation = FleetAllocator::new(9).allocate(&assignment).expect("valid");
    assert_eq!(allocation.counts(), &[6, 3]);
}

#[test]
fn scenario_c_route_failure_degrades() {
    let table = six_locations();
    let router = Straight { dead: Some("L5") };
    let report = allocate_and_route(
        &table,
        &router,
        &locs(&["X", "Y"]),
        &locs(&["L1", "L2", "L3", "L4", "L5", "L6"]),
        3,
    )
    .expect("valid");

    // X: 2 vehicles carrying [L1, L3] and [L2, L4]; Y: 1 vehicle with [L5, L6]
    let y = report.warehouse(&Location::new("Y")).expect("present");
    assert_eq!(y.vehicles().len(), 1);
    let failed = &y.vehicles()[0];
    assert!(failed.is_degraded());
    assert!(failed.route().is_empty());
    assert_eq!(failed.distance_km(), 0.0);
    assert_eq!(y.distance_km(), 0.0);

    let x = report.warehouse(&Location::new("X")).expect("present");
    assert!((x.distance_km() - 12.0).abs() < 1e-10);
    assert!((report.total_distance_km() - 12.0).abs() < 1e-10);
    assert_eq!(report.degradation().failed_routes, 1);
    assert!(report.is_degraded());
}

#[test]
fn scenario_d_unreachable_location_falls_back() {
    let table = six_locations();
    let router = Straight { dead: None };
    let report = allocate_and_route(
        &table,
        &router,
        &locs(&["X", "Y"]),
        &locs(&["L5", "L6", "NOWHERE"]),
        2,
    )
    .expect("valid");

    let x = report.warehouse(&Location::new("X")).expect("present");
    assert_eq!(x.assigned_locations(), 1);
    assert_eq!(x.vehicles()[0].assigned(), &[Location::new("NOWHERE")]);
    assert_eq!(report.degradation().fallback_assignments, 1);
    assert_eq!(report.degradation().unavailable_distances, 2);
    assert!(report.is_degraded());
}

#[test]
fn resolved_labels_are_reported() {
    let table = six_locations();
    let router = Straight { dead: None };
    let report = allocate_and_route(&table, &router, &locs(&["X", "Y"]), &locs(&["L5"]), 1)
        .expect("valid");
    let vehicle = report.vehicles().next().expect("one vehicle");
    assert_eq!(
        vehicle.route().stops(),
        vec!["L5, Lancaster", "Y, Lancaster"]
    );
    assert_eq!(vehicle.fleet_number(), 1);
}

#[test]
fn parallel_run_matches_sequential() {
    let table = six_locations();
    let router = Straight { dead: Some("L2") };
    let warehouses = locs(&["X", "Y"]);
    let locations = locs(&["L1", "L2", "L3", "L4", "L5", "L6", "NOWHERE"]);

    let sequential = Dispatcher::new(&table, &router, DispatchConfig::new(5))
        .run(&warehouses, &locations)
        .expect("valid");
    let parallel = Dispatcher::new(&table, &router, DispatchConfig::new(5).with_parallel(true))
        .run(&warehouses, &locations)
        .expect("valid");
    assert_eq!(sequential, parallel);
}

#[test]
fn config_from_json_drives_run() {
    let table = six_locations();
    let router = Straight { dead: None };
    let config = DispatchConfig::from_json(
        r#"{ "fleet_size": 2, "fallback_warehouse": 1, "distance_unit_divisor": 1.0 }"#,
    )
    .expect("valid config");
    let report = Dispatcher::new(&table, &router, config)
        .run(&locs(&["X", "Y"]), &locs(&["NOWHERE"]))
        .expect("valid");
    let y = report.warehouse(&Location::new("Y")).expect("present");
    assert_eq!(y.assigned_locations(), 1);
    assert_eq!(y.allocated_vehicles(), 2);
    assert!((report.total_distance_km() - 4000.0).abs() < 1e-10);
}
