//! # u-dispatch
//!
//! Depot assignment and fleet allocation for multi-warehouse delivery runs:
//! each delivery location goes to its nearest warehouse, a fixed fleet is
//! apportioned across warehouses by load, each warehouse's stops are dealt
//! out to its vehicles, and every vehicle's closed route is resolved and
//! rolled up into warehouse and fleet distance totals.
//!
//! Distances and routes come from pluggable oracles, so the engine itself
//! never performs network I/O.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, Assignment, FleetAllocation, Route, reports)
//! - [`distance`] — Distance oracle trait, per-run distance cache, table and synthetic oracles
//! - [`routing`] — Route oracle trait and an in-process nearest-neighbor/2-opt oracle
//! - [`assignment`] — Nearest-warehouse assignment with fallback
//! - [`allocation`] — Proportional fleet allocation and round-robin load partitioning
//! - [`aggregation`] — Per-vehicle routing and distance roll-up
//! - [`dispatch`] — The end-to-end pipeline and [`allocate_and_route`]
//! - [`config`] — Engine configuration
//! - [`error`] — Error types

pub mod aggregation;
pub mod allocation;
pub mod assignment;
pub mod config;
pub mod dispatch;
pub mod distance;
pub mod error;
pub mod models;
pub mod routing;

pub use dispatch::{allocate_and_route, Dispatcher};
