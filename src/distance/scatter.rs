//! Seeded synthetic distance oracle.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::DistanceOracle;
use crate::error::{self, DispatchError, Unavailable};
use crate::models::Location;

/// A deterministic synthetic oracle that scatters locations over a square.
///
/// Each location identifier seeds its own RNG, so a location always lands
/// on the same point for a given oracle seed regardless of query order.
/// Distances are Euclidean, rounded to whole units like a road-distance
/// service would report metres.
///
/// Locations registered with [`with_outage`](Self::with_outage) make every
/// query touching them unavailable.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::{DistanceOracle, ScatterOracle};
/// use u_dispatch::models::Location;
///
/// let oracle = ScatterOracle::new(7, 5_000.0).unwrap();
/// let (a, b) = (Location::new("LA1 5NS"), Location::new("LA1 1UJ"));
/// let d = oracle.query(&a, &b).unwrap();
/// assert_eq!(d, oracle.query(&b, &a).unwrap());
/// assert!(d <= 5_000.0 * 2f64.sqrt());
/// ```
#[derive(Debug, Clone)]
pub struct ScatterOracle {
    seed: u64,
    extent: f64,
    outages: HashSet<Location>,
}

impl ScatterOracle {
    /// Creates an oracle placing locations in `[0, extent)²`.
    ///
    /// Fails with [`DispatchError::InvalidExtent`] unless `extent` is finite
    /// and positive.
    pub fn new(seed: u64, extent: f64) -> error::Result<Self> {
        if !extent.is_finite() || extent <= 0.0 {
            return Err(DispatchError::InvalidExtent(extent));
        }
        Ok(Self {
            seed,
            extent,
            outages: HashSet::new(),
        })
    }

    /// Marks a location as unreachable.
    pub fn with_outage(mut self, location: impl Into<Location>) -> Self {
        self.outages.insert(location.into());
        self
    }

    /// The point a location is scattered to.
    pub fn position(&self, location: &Location) -> (f64, f64) {
        let mut rng = StdRng::seed_from_u64(self.seed ^ fnv1a(location.id().as_bytes()));
        let x = rng.random_range(0.0..self.extent);
        let y = rng.random_range(0.0..self.extent);
        (x, y)
    }
}

impl DistanceOracle for ScatterOracle {
    fn query(&self, origin: &Location, destination: &Location) -> Result<f64, Unavailable> {
        for location in [origin, destination] {
            if self.outages.contains(location) {
                return Err(Unavailable::new(format!("{location} is unreachable")));
            }
        }
        if origin == destination {
            return Ok(0.0);
        }
        let (ax, ay) = self.position(origin);
        let (bx, by) = self.position(destination);
        Ok(((ax - bx).powi(2) + (ay - by).powi(2)).sqrt().round())
    }
}

// FNV-1a keeps positions stable across toolchains, unlike `DefaultHasher`.
fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    hash
}
