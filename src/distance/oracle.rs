//! Distance oracle trait.

use crate::error::Unavailable;
use crate::models::Location;

/// Resolves the travel distance between two locations.
///
/// Implementations may wrap a live mapping service, a cached table, or a
/// synthetic generator. They own their timeout handling and must always
/// resolve to a distance or [`Unavailable`]; the engine never retries.
///
/// The trait requires `Sync` so that queries can be fanned out across
/// threads when parallel dispatch is enabled.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::DistanceOracle;
/// use u_dispatch::error::Unavailable;
/// use u_dispatch::models::Location;
///
/// struct Flat;
///
/// impl DistanceOracle for Flat {
///     fn query(&self, origin: &Location, destination: &Location) -> Result<f64, Unavailable> {
///         if origin == destination { Ok(0.0) } else { Ok(1000.0) }
///     }
/// }
///
/// let d = Flat.query(&Location::new("A"), &Location::new("B")).unwrap();
/// assert_eq!(d, 1000.0);
/// ```
pub trait DistanceOracle: Sync {
    /// Distance from `origin` to `destination`, in oracle units (metres for
    /// the bundled oracles).
    ///
    /// A zero result is a legitimate distance, not a failure.
    fn query(&self, origin: &Location, destination: &Location) -> Result<f64, Unavailable>;
}

impl<T: DistanceOracle + ?Sized> DistanceOracle for &T {
    fn query(&self, origin: &Location, destination: &Location) -> Result<f64, Unavailable> {
        (**self).query(origin, destination)
    }
}

impl<T: DistanceOracle + ?Sized> DistanceOracle for Box<T> {
    fn query(&self, origin: &Location, destination: &Location) -> Result<f64, Unavailable> {
        (**self).query(origin, destination)
    }
}
