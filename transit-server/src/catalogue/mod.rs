//! Transit network catalogue.
//!
//! Owns the stops, bus lines and road distances, and answers the
//! statistics queries that do not need the routing graph.

mod network;
mod stats;

pub use network::TransitNetwork;
pub use stats::LineStatistics;
