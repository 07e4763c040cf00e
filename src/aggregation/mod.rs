//! Per-vehicle routing and distance roll-up.

mod aggregator;

pub use aggregator::RouteAggregator;
