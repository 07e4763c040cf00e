//! Sparse warehouse × location distance cache.

/// A warehouses × locations distance matrix stored in row-major order.
///
/// Entries are `None` where the oracle could not supply a distance. The
/// matrix is filled once per assignment run so that each pair is queried
/// at most once.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::DistanceMatrix;
///
/// let mut dm = DistanceMatrix::new(2, 1);
/// dm.set(0, 0, 900.0);
/// dm.set(1, 0, 400.0);
/// assert_eq!(dm.nearest(0), Some((1, 400.0)));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<Option<f64>>,
    warehouses: usize,
    locations: usize,
}

impl DistanceMatrix {
    /// Creates a matrix with every entry missing.
    pub fn new(warehouses: usize, locations: usize) -> Self {
        Self {
            data: vec![None; warehouses * locations],
            warehouses,
            locations,
        }
    }

    /// Returns the cached distance from `warehouse` to `location`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, warehouse: usize, location: usize) -> Option<f64> {
        self.data[warehouse * self.locations + location]
    }

    /// Caches the distance from `warehouse` to `location`.
    pub fn set(&mut self, warehouse: usize, location: usize, distance: f64) {
        self.data[warehouse * self.locations + location] = Some(distance);
    }

    /// Number of warehouse rows.
    pub fn num_warehouses(&self) -> usize {
        self.warehouses
    }

    /// Number of location columns.
    pub fn num_locations(&self) -> usize {
        self.locations
    }

    /// Number of pairs without a distance.
    pub fn num_missing(&self) -> usize {
        self.data.iter().filter(|d| d.is_none()).count()
    }

    /// Returns the nearest warehouse to `location` and its distance.
    ///
    /// Ties go to the lowest warehouse index. Returns `None` if no warehouse
    /// has a distance for this location.
    pub fn nearest(&self, location: usize) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for warehouse in 0..self.warehouses {
            let Some(d) = self.get(warehouse, location) else {
                continue;
            };
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((warehouse, d)),
            }
        }
        best
    }
}
