//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::{DispatchError, Result};

/// Metres per kilometre: the default oracle-to-report unit conversion.
pub const DEFAULT_UNIT_DIVISOR: f64 = 1000.0;

/// Options consumed by the dispatch engine.
///
/// Only `fleet_size` is required; the fallback warehouse defaults to the
/// first one supplied and distances are converted from metres to
/// kilometres.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::DispatchConfig;
///
/// let config = DispatchConfig::from_json(r#"{ "fleet_size": 30 }"#).unwrap();
/// assert_eq!(config.fleet_size(), 30);
/// assert_eq!(config.fallback_warehouse(), 0);
/// assert_eq!(config.distance_unit_divisor(), 1000.0);
/// assert!(!config.parallel());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchConfig {
    fleet_size: usize,
    #[serde(default)]
    fallback_warehouse: usize,
    #[serde(default = "default_unit_divisor")]
    distance_unit_divisor: f64,
    #[serde(default)]
    parallel: bool,
}

fn default_unit_divisor() -> f64 {
    DEFAULT_UNIT_DIVISOR
}

impl DispatchConfig {
    /// Creates a configuration for a fleet of the given size.
    pub fn new(fleet_size: usize) -> Self {
        Self {
            fleet_size,
            fallback_warehouse: 0,
            distance_unit_divisor: DEFAULT_UNIT_DIVISOR,
            parallel: false,
        }
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the warehouse (by input index) that receives unroutable locations.
    pub fn with_fallback_warehouse(mut self, index: usize) -> Self {
        self.fallback_warehouse = index;
        self
    }

    /// Sets the divisor converting oracle distances to reporting units.
    pub fn with_distance_unit_divisor(mut self, divisor: f64) -> Self {
        self.distance_unit_divisor = divisor;
        self
    }

    /// Enables concurrent fan-out of independent oracle calls.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Total number of vehicles to apportion.
    pub fn fleet_size(&self) -> usize {
        self.fleet_size
    }

    /// Input index of the fallback warehouse.
    pub fn fallback_warehouse(&self) -> usize {
        self.fallback_warehouse
    }

    /// Divisor applied to summed leg distances.
    pub fn distance_unit_divisor(&self) -> f64 {
        self.distance_unit_divisor
    }

    /// Whether oracle calls are fanned out concurrently.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Checks the configuration against the number of warehouses supplied.
    pub fn validate(&self, warehouses: usize) -> Result<()> {
        if warehouses == 0 {
            return Err(DispatchError::NoWarehouses);
        }
        if self.fleet_size == 0 {
            return Err(DispatchError::ZeroFleet);
        }
        if self.fallback_warehouse >= warehouses {
            return Err(DispatchError::FallbackOutOfRange {
                index: self.fallback_warehouse,
                warehouses,
            });
        }
        check_unit_divisor(self.distance_unit_divisor)
    }
}

/// Rejects a zero, negative or non-finite unit divisor.
pub(crate) fn check_unit_divisor(divisor: f64) -> Result<()> {
    if !divisor.is_finite() || divisor <= 0.0 {
        return Err(DispatchError::InvalidUnitDivisor(divisor));
    }
    Ok(())
}
