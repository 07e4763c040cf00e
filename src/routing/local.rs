//! In-process route oracle.
//!
//! # Algorithm
//!
//! Queries the wrapped distance oracle for every ordered pair of waypoints,
//! then orders the intermediate stops greedily (always drive to the nearest
//! unvisited stop) and improves the order with first-improvement 2-opt.
//! The first and last waypoints never move.
//!
//! # Complexity
//!
//! O(n²) oracle queries; O(n³) worst case for 2-opt convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use tracing::trace;

use crate::distance::DistanceOracle;
use crate::error::Unavailable;
use crate::models::{Leg, Location};
use crate::routing::RouteOracle;

/// A [`RouteOracle`] that sequences stops locally over a [`DistanceOracle`].
///
/// Any pair the distance oracle cannot resolve makes the whole route
/// unavailable.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::DistanceTable;
/// use u_dispatch::models::Location;
/// use u_dispatch::routing::{LocalRouteOracle, RouteOracle};
///
/// let table = DistanceTable::from_coordinates(&[
///     (Location::new("W"), 0.0, 0.0),
///     (Location::new("A"), 1.0, 0.0),
///     (Location::new("B"), 2.0, 0.0),
/// ]);
/// let oracle = LocalRouteOracle::new(table);
/// let waypoints = ["W", "B", "A", "W"].map(Location::new);
/// let legs = oracle.optimize(&waypoints).unwrap();
/// let stops: Vec<&str> = legs.iter().map(|l| l.stop.as_str()).collect();
/// assert_eq!(stops, vec!["A", "B", "W"]);
/// ```
#[derive(Debug, Clone)]
pub struct LocalRouteOracle<D> {
    distances: D,
    improve: bool,
}

impl<D: DistanceOracle> LocalRouteOracle<D> {
    /// Wraps a distance oracle.
    pub fn new(distances: D) -> Self {
        Self {
            distances,
            improve: true,
        }
    }

    /// Skips 2-opt and keeps the nearest-neighbor order.
    pub fn without_improvement(mut self) -> Self {
        self.improve = false;
        self
    }

    fn pairwise(&self, waypoints: &[Location]) -> Result<Vec<Vec<f64>>, Unavailable> {
        let n = waypoints.len();
        let mut grid = vec![vec![0.0; n]; n];
        for (i, from) in waypoints.iter().enumerate() {
            for (j, to) in waypoints.iter().enumerate() {
                if i != j {
                    grid[i][j] = self.distances.query(from, to)?;
                }
            }
        }
        Ok(grid)
    }
}

impl<D: DistanceOracle> RouteOracle for LocalRouteOracle<D> {
    fn optimize(&self, waypoints: &[Location]) -> Result<Vec<Leg>, Unavailable> {
        if waypoints.len() < 2 {
            return Err(Unavailable::new("a route needs a start and an end"));
        }
        let grid = self.pairwise(waypoints)?;
        let start = 0;
        let end = waypoints.len() - 1;

        let mut order = nearest_neighbor_order(&grid, start, 1..end);
        if self.improve {
            two_opt_open(&mut order, start, end, &grid);
        }
        trace!("Sequenced {} stops: {order:?}", order.len());

        let mut legs = Vec::with_capacity(order.len() + 1);
        let mut prev = start;
        for &next in order.iter().chain(std::iter::once(&end)) {
            legs.push(Leg::new(waypoints[next].id(), grid[prev][next]));
            prev = next;
        }
        Ok(legs)
    }
}

/// Greedily orders `candidates`, starting from `from`. Ties go to the
/// lower index.
fn nearest_neighbor_order(
    grid: &[Vec<f64>],
    from: usize,
    candidates: impl Iterator<Item = usize>,
) -> Vec<usize> {
    let mut remaining: Vec<usize> = candidates.collect();
    let mut order = Vec::with_capacity(remaining.len());
    let mut current = from;
    while !remaining.is_empty() {
        let mut best = 0;
        for k in 1..remaining.len() {
            if grid[current][remaining[k]] < grid[current][remaining[best]] {
                best = k;
            }
        }
        current = remaining.remove(best);
        order.push(current);
    }
    order
}

/// 2-opt over an open path `start → route… → end`, reversing segments of
/// `route` while that shortens the path.
///
/// Distances may be asymmetric, so the delta includes every edge inside the
/// reversed segment, not just the two boundary edges.
fn two_opt_open(route: &mut [usize], start: usize, end: usize, grid: &[Vec<f64>]) {
    let n = route.len();
    if n < 2 {
        return;
    }
    let mut improved = true;
    while improved {
        improved = false;
        for i in 0..n - 1 {
            for j in i + 1..n {
                let prev_i = if i == 0 { start } else { route[i - 1] };
                let next_j = if j == n - 1 { end } else { route[j + 1] };
                let mut old_cost = grid[prev_i][route[i]] + grid[route[j]][next_j];
                let mut new_cost = grid[prev_i][route[j]] + grid[route[i]][next_j];
                for k in i..j {
                    old_cost += grid[route[k]][route[k + 1]];
                    new_cost += grid[route[k + 1]][route[k]];
                }
                if new_cost - old_cost < -1e-10 {
                    route[i..=j].reverse();
                    improved = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceTable;

    fn path_length(route: &[usize], start: usize, end: usize, grid: &[Vec<f64>]) -> f64 {
        let mut prev = start;
        let mut total = 0.0;
        for &next in route.iter().chain(std::iter::once(&end)) {
            total += grid[prev][next];
            prev = next;
        }
        total
    }

    fn square() -> Vec<(Location, f64, f64)> {
        vec![
            (Location::new("W"), 5.0, 5.0),
            (Location::new("A"), 0.0, 0.0),
            (Location::new("B"), 10.0, 0.0),
            (Location::new("C"), 0.0, 10.0),
            (Location::new("D"), 10.0, 10.0),
        ]
    }

    #[test]
    fn test_legs_end_at_anchor() {
        let oracle = LocalRouteOracle::new(DistanceTable::from_coordinates(&square()));
        let waypoints = ["W", "A", "D", "B", "C", "W"].map(Location::new);
        let legs = oracle.optimize(&waypoints).expect("all pairs known");
        assert_eq!(legs.len(), 5);
        assert_eq!(legs.last().map(|l| l.stop.as_str()), Some("W"));
        let mut visited: Vec<&str> = legs[..4].iter().map(|l| l.stop.as_str()).collect();
        visited.sort_unstable();
        assert_eq!(visited, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_two_opt_does_not_worsen() {
        let table = DistanceTable::from_coordinates(&square());
        let waypoints = ["W", "A", "D", "B", "C", "W"].map(Location::new);
        let improved: f64 = LocalRouteOracle::new(&table)
            .optimize(&waypoints)
            .expect("known")
            .iter()
            .map(|l| l.distance)
            .sum();
        let greedy: f64 = LocalRouteOracle::new(&table)
            .without_improvement()
            .optimize(&waypoints)
            .expect("known")
            .iter()
            .map(|l| l.distance)
            .sum();
        assert!(improved <= greedy + 1e-10);
    }

    #[test]
    fn test_two_opt_open_uncrosses() {
        // start 0 at x=0, end 3 at x=3; stops 1 (x=1), 2 (x=2)
        let xs = [0.0f64, 1.0, 2.0, 3.0];
        let grid: Vec<Vec<f64>> = xs
            .iter()
            .map(|a| xs.iter().map(|b| (a - b).abs()).collect())
            .collect();
        let mut route = vec![2, 1];
        two_opt_open(&mut route, 0, 3, &grid);
        assert_eq!(route, vec![1, 2]);
        assert!((path_length(&route, 0, 3, &grid) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_two_opt_respects_one_way_distances() {
        let table = DistanceTable::new()
            .with_distance("W", "A", 1.0)
            .with_distance("W", "B", 1.0)
            .with_distance("A", "B", 1.0)
            .with_distance("B", "A", 100.0)
            .with_distance("B", "W", 10.0)
            .with_distance("A", "W", 1.0);
        let waypoints = ["W", "A", "B", "W"].map(Location::new);
        let total = |legs: Vec<Leg>| -> (f64, Vec<String>) {
            (
                legs.iter().map(|l| l.distance).sum(),
                legs.into_iter().map(|l| l.stop).collect(),
            )
        };
        let greedy = total(
            LocalRouteOracle::new(&table)
                .without_improvement()
                .optimize(&waypoints)
                .expect("known"),
        );
        let improved = total(
            LocalRouteOracle::new(&table)
                .optimize(&waypoints)
                .expect("known"),
        );
        assert_eq!(greedy, (12.0, vec!["A".into(), "B".into(), "W".into()]));
        assert_eq!(improved, greedy);
    }

    #[test]
    fn test_two_opt_open_asymmetric_inner_edge() {
        // forward 0 -> 1 -> 2 -> 3 costs 3; reversing [1, 2] would pay 50 inside
        let mut grid = vec![vec![1.0; 4]; 4];
        grid[2][1] = 50.0;
        grid[0][2] = 0.5;
        grid[1][3] = 0.5;
        let mut route = vec![1, 2];
        two_opt_open(&mut route, 0, 3, &grid);
        assert_eq!(route, vec![1, 2]);
        assert!((path_length(&route, 0, 3, &grid) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_nearest_neighbor_order() {
        let xs = [0.0f64, 10.0, 1.0, 5.0];
        let grid: Vec<Vec<f64>> = xs
            .iter()
            .map(|a| xs.iter().map(|b| (a - b).abs()).collect())
            .collect();
        assert_eq!(nearest_neighbor_order(&grid, 0, 1..4), vec![2, 3, 1]);
    }

    #[test]
    fn test_direct_trip() {
        let table = DistanceTable::new().with_symmetric("W", "A", 700.0);
        let oracle = LocalRouteOracle::new(table);
        let legs = oracle
            .optimize(&["W", "A", "W"].map(Location::new))
            .expect("known");
        assert_eq!(legs, vec![Leg::new("A", 700.0), Leg::new("W", 700.0)]);
    }

    #[test]
    fn test_missing_pair_fails_route() {
        let table = DistanceTable::new().with_distance("W", "A", 700.0);
        let oracle = LocalRouteOracle::new(table);
        assert!(oracle
            .optimize(&["W", "A", "W"].map(Location::new))
            .is_err());
    }

    #[test]
    fn test_too_few_waypoints() {
        let oracle = LocalRouteOracle::new(DistanceTable::new());
        assert!(oracle.optimize(&[Location::new("W")]).is_err());
    }
}
