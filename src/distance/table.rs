//! Lookup-table distance oracle.

use std::collections::HashMap;

use super::DistanceOracle;
use crate::error::Unavailable;
use crate::models::Location;

/// A distance oracle backed by an explicit table of pairs.
///
/// Useful as a cache in front of a slow service, or to pin down exact
/// distances in tests. Pairs not in the table are [`Unavailable`], except
/// that a location is always at distance zero from itself.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::{DistanceOracle, DistanceTable};
/// use u_dispatch::models::Location;
///
/// let table = DistanceTable::new()
///     .with_symmetric("W1", "A", 1200.0)
///     .with_distance("W2", "A", 800.0);
///
/// let a = Location::new("A");
/// assert_eq!(table.query(&Location::new("W1"), &a), Ok(1200.0));
/// assert_eq!(table.query(&a, &Location::new("W1")), Ok(1200.0));
/// assert!(table.query(&a, &Location::new("W2")).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    entries: HashMap<(String, String), f64>,
}

impl DistanceTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes a symmetric Euclidean table from planar coordinates.
    ///
    /// Every ordered pair of distinct points gets an entry.
    pub fn from_coordinates(points: &[(Location, f64, f64)]) -> Self {
        let mut table = Self::new();
        for (i, (a, ax, ay)) in points.iter().enumerate() {
            for (b, bx, by) in points.iter().skip(i + 1) {
                let d = ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt();
                table.insert_symmetric(a.id(), b.id(), d);
            }
        }
        table
    }

    /// Adds a one-way entry.
    pub fn with_distance(mut self, origin: &str, destination: &str, distance: f64) -> Self {
        self.insert(origin, destination, distance);
        self
    }

    /// Adds the same entry in both directions.
    pub fn with_symmetric(mut self, a: &str, b: &str, distance: f64) -> Self {
        self.insert_symmetric(a, b, distance);
        self
    }

    /// Inserts a one-way entry, replacing any previous value.
    pub fn insert(&mut self, origin: &str, destination: &str, distance: f64) {
        self.entries
            .insert((origin.to_owned(), destination.to_owned()), distance);
    }

    /// Inserts the same entry in both directions.
    pub fn insert_symmetric(&mut self, a: &str, b: &str, distance: f64) {
        self.insert(a, b, distance);
        self.insert(b, a, distance);
    }

    /// Number of one-way entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DistanceOracle for DistanceTable {
    fn query(&self, origin: &Location, destination: &Location) -> Result<f64, Unavailable> {
        if let Some(&d) = self
            .entries
            .get(&(origin.id().to_owned(), destination.id().to_owned()))
        {
            return Ok(d);
        }
        if origin == destination {
            return Ok(0.0);
        }
        Err(Unavailable::new(format!(
            "no table entry for {origin} -> {destination}"
        )))
    }
}
