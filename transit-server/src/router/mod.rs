//! Itinerary routing engine.
//!
//! Turns a finished [`TransitNetwork`](crate::catalogue::TransitNetwork) into
//! a weighted directed graph once, then answers fastest-itinerary queries
//! with Dijkstra's algorithm and maps each found path back into wait and
//! ride legs.

mod builder;
mod config;
mod dijkstra;
mod graph;
mod itinerary;
mod transit_router;


pub use builder::{EdgeItem, RouteGraph, RouteGraphBuilder, StopVertices};
pub use config::{ConfigError, RoutingSettings};
pub use dijkstra::{Path, ShortestPathEngine};
pub use graph::{DirectedWeightedGraph, Edge, EdgeId, VertexId, Weight};
pub use itinerary::{Itinerary, Leg, compose};
pub use transit_router::{RouteError, TransitRouter};
