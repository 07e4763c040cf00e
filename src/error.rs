//! Error types.

use crate::models::Location;

/// Errors returned by the dispatch engine.
///
/// Precondition violations are raised before any oracle is queried.
/// The `Unassigned`, `DuplicateAssignment`, `NoVehicles` and `AllocationUnderflow` variants are
/// defect signals: they indicate a broken internal invariant and are
/// never expected for valid inputs.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The warehouse list was empty.
    #[error("at least one warehouse is required")]
    NoWarehouses,

    /// The configured fleet size was zero.
    #[error("fleet size must be positive")]
    ZeroFleet,

    /// Fewer vehicles than warehouses with assigned locations.
    #[error("fleet of {fleet_size} cannot cover {required} loaded warehouses")]
    FleetTooSmall {
        /// Configured fleet size.
        fleet_size: usize,
        /// Number of warehouses with at least one assigned location.
        required: usize,
    },

    /// The fallback warehouse index does not name a warehouse.
    #[error("fallback warehouse index {index} out of range for {warehouses} warehouses")]
    FallbackOutOfRange {
        /// Configured fallback index.
        index: usize,
        /// Number of warehouses supplied.
        warehouses: usize,
    },

    /// The distance unit divisor was zero, negative or non-finite.
    #[error("distance unit divisor must be finite and positive, got {0}")]
    InvalidUnitDivisor(f64),

    /// A synthetic oracle extent was zero, negative or non-finite.
    #[error("scatter extent must be finite and positive, got {0}")]
    InvalidExtent(f64),

    /// A location was missing from every warehouse's assignment.
    #[error("location {location} is not assigned to any warehouse")]
    Unassigned {
        /// The orphaned location.
        location: Location,
    },

    /// A location was held by more than one warehouse.
    #[error("location {location} is assigned to more than one warehouse")]
    DuplicateAssignment {
        /// The duplicated location.
        location: Location,
    },

    /// A warehouse has stops but no vehicles to carry them.
    #[error("warehouse {warehouse} has {stops} stops but no vehicles")]
    NoVehicles {
        /// The warehouse.
        warehouse: Location,
        /// Number of stops waiting for a vehicle.
        stops: usize,
    },

    /// The remainder correction left a loaded warehouse without a vehicle.
    #[error("remainder correction left warehouse {warehouse} without vehicles")]
    AllocationUnderflow {
        /// The warehouse whose count dropped below one.
        warehouse: Location,
    },

    /// Configuration could not be parsed.
    #[error(transparent)]
    Config(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, DispatchError>;

/// An oracle could not resolve a query.
///
/// Distinct from a legitimate zero distance. Oracle implementations wrap
/// their own transport or lookup failures in this type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("oracle unavailable: {reason}")]
pub struct Unavailable {
    reason: String,
}

impl Unavailable {
    /// Creates an unavailability signal with a human-readable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Why the oracle could not answer.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
